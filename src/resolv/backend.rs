//! The trait defining a resolution backend.

use crate::base::{Address, Node, PublicKey};
use bytes::Bytes;
use std::boxed::Box;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;

/// The future returned by the methods of [`Backend`].
///
/// It resolves into `Ok(None)` if the record does not exist and into an
/// error if the backend could not be asked.
pub type Lookup<'a, T> =
    Pin<Box<dyn Future<Output = Result<Option<T>, io::Error>> + Send + 'a>>;

//------------ Backend -------------------------------------------------------

/// A connection to the naming system.
///
/// Records of a name are held by its resolver. A backend first finds the
/// resolver for the node of a name and then asks that resolver for
/// individual records.
///
/// The backend is shared between all concurrent sessions and must be safe
/// to use from multiple tasks. Whatever timeouts and connection handling
/// it needs are its own business.
///
/// A backend may return a zero address or key instead of `None` for
/// records that are not set. Both mean the same.
pub trait Backend: Send + Sync {
    /// Looks up the address of the resolver for a node.
    fn resolver<'a>(&'a self, node: &'a Node) -> Lookup<'a, Address>;

    /// Reads the address record for a node from a resolver.
    fn addr<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Address>;

    /// Reads the raw content pointer for a node from a resolver.
    fn contenthash<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Bytes>;

    /// Reads the public key for a node from a resolver.
    fn pubkey<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, PublicKey>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn resolver<'a>(&'a self, node: &'a Node) -> Lookup<'a, Address> {
        (**self).resolver(node)
    }

    fn addr<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Address> {
        (**self).addr(resolver, node)
    }

    fn contenthash<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Bytes> {
        (**self).contenthash(resolver, node)
    }

    fn pubkey<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, PublicKey> {
        (**self).pubkey(resolver, node)
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn resolver<'a>(&'a self, node: &'a Node) -> Lookup<'a, Address> {
        self.as_ref().resolver(node)
    }

    fn addr<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Address> {
        self.as_ref().addr(resolver, node)
    }

    fn contenthash<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, Bytes> {
        self.as_ref().contenthash(resolver, node)
    }

    fn pubkey<'a>(
        &'a self,
        resolver: &'a Address,
        node: &'a Node,
    ) -> Lookup<'a, PublicKey> {
        self.as_ref().pubkey(resolver, node)
    }
}
