//! A backend keeping all records in memory.
//!
//! This is useful for tests and for deployments serving a fixed set of
//! names. Lookups can be made to fail on purpose to exercise the error
//! paths of whatever sits on top of a backend.

use super::backend::{Backend, Lookup};
use super::error::Record;
use crate::base::{Address, Name, Node, PublicKey};
use bytes::Bytes;
use std::boxed::Box;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

//------------ MemoryBackend -------------------------------------------------

/// A backend answering from in-memory records.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    /// The records by node.
    domains: HashMap<Node, Records>,

    /// Lookups that fail with an I/O error.
    faults: HashSet<(Node, Fault)>,

    /// The number of lookups performed so far.
    lookups: AtomicUsize,
}

impl MemoryBackend {
    /// Creates a new, empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a domain served by the given resolver.
    ///
    /// Returns the records of the domain for adding records. Any earlier
    /// records of the domain are dropped.
    pub fn insert(&mut self, name: &Name, resolver: Address) -> &mut Records {
        let records = self.domains.entry(name.node()).or_default();
        *records = Records {
            resolver,
            ..Default::default()
        };
        records
    }

    /// Makes a lookup for a domain fail.
    pub fn inject_fault(&mut self, name: &Name, fault: Fault) {
        self.faults.insert((name.node(), fault));
    }

    /// Returns the number of lookups performed so far.
    ///
    /// Failed lookups are counted, too.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    fn lookup<T>(
        &self,
        node: &Node,
        fault: Fault,
        resolver: Option<&Address>,
        op: impl FnOnce(&Records) -> Option<T>,
    ) -> Result<Option<T>, io::Error> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if self.faults.contains(&(*node, fault)) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "injected fault",
            ));
        }
        Ok(self
            .domains
            .get(node)
            .filter(|records| {
                resolver.map_or(true, |resolver| records.resolver == *resolver)
            })
            .and_then(op))
    }
}

impl Backend for MemoryBackend {
    fn resolver<'a>(&'a self, node: &'a Node) -> Lookup<'a, Address> {
        let res = self.lookup(node, Fault::Resolver, None, |records| {
            Some(records.resolver)
        });
        Box::pin(async move { res })
    }

    fn addr<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Address> {
        let res = self.lookup(
            node,
            Fault::Record(Record::Address),
            Some(resolver),
            |records| records.addr,
        );
        Box::pin(async move { res })
    }

    fn contenthash<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Bytes> {
        let res = self.lookup(
            node,
            Fault::Record(Record::Contenthash),
            Some(resolver),
            |records| records.contenthash.clone(),
        );
        Box::pin(async move { res })
    }

    fn pubkey<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, PublicKey> {
        let res = self.lookup(
            node,
            Fault::Record(Record::PublicKey),
            Some(resolver),
            |records| records.pubkey,
        );
        Box::pin(async move { res })
    }
}

//------------ Records -------------------------------------------------------

/// The records of a domain.
#[derive(Clone, Debug, Default)]
pub struct Records {
    resolver: Address,
    addr: Option<Address>,
    contenthash: Option<Bytes>,
    pubkey: Option<PublicKey>,
}

impl Records {
    /// Sets the address record.
    pub fn set_addr(&mut self, addr: Address) -> &mut Self {
        self.addr = Some(addr);
        self
    }

    /// Sets the content pointer.
    pub fn set_contenthash(&mut self, octets: impl Into<Bytes>) -> &mut Self {
        self.contenthash = Some(octets.into());
        self
    }

    /// Sets the public key.
    pub fn set_pubkey(&mut self, key: PublicKey) -> &mut Self {
        self.pubkey = Some(key);
        self
    }
}

//------------ Fault ---------------------------------------------------------

/// A lookup that can be made to fail.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Fault {
    /// Looking up the resolver.
    Resolver,

    /// Reading a record.
    Record(Record),
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::resolv::{Error, Session, Unavailable};

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    const RESOLVER: Address = Address::from_octets([0x42; 20]);

    #[tokio::test]
    async fn open_and_read() {
        let mut backend = MemoryBackend::new();
        backend
            .insert(&name("vitalik.eth"), RESOLVER)
            .set_addr(Address::from_octets([1; 20]));

        let session = Session::open(&backend, "vitalik.eth").await.unwrap();
        assert_eq!(session.resolver_address(), RESOLVER);
        assert_eq!(backend.lookups(), 1);
        assert_eq!(
            session.address().await.unwrap(),
            Address::from_octets([1; 20])
        );
        // No caching: each accessor call asks the backend.
        session.address().await.unwrap();
        assert_eq!(backend.lookups(), 3);
        assert!(matches!(
            session.public_key().await,
            Err(Error::RecordNotSet(Record::PublicKey))
        ));
        assert!(matches!(
            session.content_pointer().await,
            Err(Error::RecordNotSet(Record::Contenthash))
        ));
    }

    #[tokio::test]
    async fn unavailable() {
        let mut backend = MemoryBackend::new();
        backend.insert(&name("zero.eth"), Address::ZERO);
        backend.insert(&name("broken.eth"), RESOLVER);
        backend.inject_fault(&name("broken.eth"), Fault::Resolver);

        for (domain, io) in [
            ("missing.eth", false),
            ("zero.eth", false),
            ("broken.eth", true),
            ("", false),
            ("a..eth", false),
        ] {
            let err = Session::open(&backend, domain).await.err().unwrap();
            assert!(
                matches!(err, Error::ResolutionUnavailable { .. }),
                "{}",
                domain
            );
            assert_eq!(err.is_retryable(), io, "{}", domain);
        }

        let err = Session::open(&backend, "a..eth").await.err().unwrap();
        assert!(matches!(
            err,
            Error::ResolutionUnavailable {
                cause: Unavailable::InvalidName(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn zero_records_are_unset() {
        let mut backend = MemoryBackend::new();
        backend
            .insert(&name("zero.eth"), RESOLVER)
            .set_addr(Address::ZERO)
            .set_pubkey(PublicKey::new([0; 32], [0; 32]));
        let session = Session::open(&backend, "zero.eth").await.unwrap();
        assert!(matches!(
            session.address().await,
            Err(Error::RecordNotSet(Record::Address))
        ));
        assert!(matches!(
            session.public_key().await,
            Err(Error::RecordNotSet(Record::PublicKey))
        ));
    }

    #[tokio::test]
    async fn record_faults() {
        let mut backend = MemoryBackend::new();
        backend
            .insert(&name("flaky.eth"), RESOLVER)
            .set_contenthash(&b"\xe4\x01\x00"[..]);
        backend.inject_fault(
            &name("flaky.eth"),
            Fault::Record(Record::Contenthash),
        );
        let session = Session::open(&backend, "flaky.eth").await.unwrap();
        let err = session.content_pointer().await.unwrap_err();
        assert!(matches!(
            err,
            Error::RecordReadError(Record::Contenthash, _)
        ));
        assert!(err.is_retryable());
    }
}
