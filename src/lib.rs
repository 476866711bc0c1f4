//! Resolving and rendering the attributes of ENS names.
//!
//! This crate looks up the records of a name in the Ethereum Name Service
//! and renders them as text, ready to be passed on as, for instance, HTTP
//! response headers. The interesting part is the content pointer record:
//! a self-describing piece of binary data that may contain a content
//! identifier for IPFS or IPNS, or the address of content in any other
//! storage system registered in the multicodec table.
//!
//! The naming system itself is accessed through a backend supplied by the
//! application. The crate neither caches results nor verifies the answers
//! of the backend.
//!
//! # Modules
//!
//! * [base] contains fundamental types such as names, their hashes, and
//!   account addresses,
//! * [utils] provides the text encodings used for rendering,
//! * [multicodec] contains the multicodec registry and decodes content
//!   pointers,
//! * [cid] parses and renders content identifiers,
//! * [resolv] defines the backend and performs the lookups for a domain,
//! * [attr] resolves named attributes into output fields,
//! * [conf] holds the configuration of a request handler, and
//! * [error] defines the error returned when resolution fails.
//!
#![cfg_attr(feature = "logging", doc = "* [logging]:")]
#![cfg_attr(not(feature = "logging"), doc = "* logging:")]
//!   Sets up a log subscriber for the events emitted by the crate.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serializing and deserializing the handler
//!   configuration and serializing results via
//!   [serde](https://serde.rs/).
//! * `logging`: Enables the
#![cfg_attr(feature = "logging", doc = "  [logging]")]
#![cfg_attr(not(feature = "logging"), doc = "  logging")]
//!   module which sets up a
//!   [tracing-subscriber](https://github.com/tokio-rs/tracing) subscriber.
//! * `resolv-sync`: Enables `attr::resolve_blocking`, a synchronous
//!   wrapper running resolution on a private
//!   [Tokio](https://tokio.rs/) runtime.
//!
//! # Example
//!
//! ```
//! use ens_attributes::attr::{self, Field};
//! use ens_attributes::base::{Address, Name};
//! use ens_attributes::resolv::MemoryBackend;
//!
//! # async fn run() -> Result<(), ens_attributes::Error> {
//! let mut backend = MemoryBackend::new();
//! backend
//!     .insert(
//!         &Name::new("example.eth").unwrap(),
//!         Address::from_octets([0x11; 20]),
//!     )
//!     .set_addr(Address::from_octets([0x22; 20]));
//!
//! let res = attr::resolve(
//!     &backend, "example.eth", ["address", "resolver_address"]
//! ).await?;
//! assert_eq!(res.len(), 2);
//! assert!(res.get(Field::Address).is_some());
//! # Ok(())
//! # }
//! ```
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::attr::{resolve, resolve_into, AttributeResult, Field, Sink};
pub use self::error::{Error, ErrorKind};

pub mod attr;
pub mod base;
pub mod cid;
pub mod conf;
pub mod error;
pub mod multicodec;
pub mod resolv;
pub mod utils;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;
