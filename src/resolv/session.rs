//! Looking up the records of one domain.

use super::backend::Backend;
use super::error::{Error, Record, Unavailable};
use crate::base::{Address, Name, Node, PublicKey};
use crate::utils::base16;
use bytes::Bytes;
use std::io;
use std::sync::Arc;
use tracing::{debug, trace};

//------------ Session -------------------------------------------------------

/// A lookup session for a single domain.
///
/// A session is opened by finding the resolver of the domain. The record
/// accessors then ask that resolver through the backend. Nothing is
/// cached: every call to an accessor asks the backend again.
pub struct Session<'a, B: ?Sized> {
    backend: &'a B,
    name: Name,
    node: Node,
    resolver: Address,
}

impl<'a, B: Backend + ?Sized> Session<'a, B> {
    /// Opens a session for `domain`.
    ///
    /// Fails if the domain isn’t a valid name, if it has no resolver, or
    /// if the backend fails while looking for one.
    pub async fn open(backend: &'a B, domain: &str) -> Result<Self, Error> {
        let name = Name::new(domain).map_err(|err| {
            Error::unavailable(domain, Unavailable::InvalidName(err))
        })?;
        let node = name.node();
        trace!(domain = %name, %node, "looking up resolver");
        let resolver = match backend.resolver(&node).await {
            Ok(Some(resolver)) if !resolver.is_zero() => resolver,
            Ok(_) => {
                return Err(Error::unavailable(domain, Unavailable::NoResolver))
            }
            Err(err) => {
                return Err(Error::unavailable(
                    domain,
                    Unavailable::Io(Arc::new(err)),
                ))
            }
        };
        debug!(domain = %name, %resolver, "ENS domain resolver found");
        Ok(Session {
            backend,
            name,
            node,
            resolver,
        })
    }

    /// Returns the name the session was opened for.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the node of the name.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Returns the address of the resolver.
    ///
    /// This was learned when opening the session and needs no lookup.
    #[must_use]
    pub fn resolver_address(&self) -> Address {
        self.resolver
    }

    /// Reads the address record.
    pub async fn address(&self) -> Result<Address, Error> {
        let res = self.backend.addr(&self.resolver, &self.node).await;
        let addr = Self::record(Record::Address, res, Address::is_zero)?;
        debug!(domain = %self.name, address = %addr, "address found");
        Ok(addr)
    }

    /// Reads the raw content pointer.
    ///
    /// The returned octets are still multicodec encoded. An empty record
    /// is returned as is and left for the decoder to reject.
    pub async fn content_pointer(&self) -> Result<Bytes, Error> {
        let res = self.backend.contenthash(&self.resolver, &self.node).await;
        let octets = Self::record(Record::Contenthash, res, |_| false)?;
        debug!(
            domain = %self.name,
            contenthash = %base16::encode_display(&octets),
            "content hash found"
        );
        Ok(octets)
    }

    /// Reads the public key.
    pub async fn public_key(&self) -> Result<PublicKey, Error> {
        let res = self.backend.pubkey(&self.resolver, &self.node).await;
        let key = Self::record(Record::PublicKey, res, PublicKey::is_zero)?;
        debug!(domain = %self.name, "public key found");
        Ok(key)
    }

    fn record<T>(
        record: Record,
        res: Result<Option<T>, io::Error>,
        is_unset: impl FnOnce(&T) -> bool,
    ) -> Result<T, Error> {
        match res {
            Ok(Some(value)) if !is_unset(&value) => Ok(value),
            Ok(_) => Err(Error::RecordNotSet(record)),
            Err(err) => {
                debug!(%record, %err, "record lookup failed");
                Err(Error::RecordReadError(record, Arc::new(err)))
            }
        }
    }
}
