//! Looking up the records of a domain.
//!
//! The naming system itself is reached through a [`Backend`], a
//! connection supplied by the application. On top of it, a [`Session`]
//! performs the lookups for a single domain: it finds the domain’s
//! resolver when opened and then reads individual records from it.
//!
//! [`MemoryBackend`] answers lookups from records held in memory.

pub use self::backend::{Backend, Lookup};
pub use self::error::{Error, Record, Unavailable};
pub use self::memory::{Fault, MemoryBackend, Records};
pub use self::session::Session;

pub mod backend;
pub mod error;
pub mod memory;
pub mod session;
