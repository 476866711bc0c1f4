//! Basic types.
//!
//! This module collects the fundamental types the rest of the crate is
//! built from:
//!
//! * [name] contains [`Name`], a validated domain name, and [`Node`], the
//!   hash of a name used to look up its records,
//! * [addr] contains [`Address`], an account address with its checksummed
//!   text form, and [`PublicKey`], a public key coordinate pair, and
//! * [varint] parses and composes the unsigned variable length integers
//!   used by all self-describing binary formats.

pub use self::addr::{Address, PublicKey};
pub use self::name::{Name, NameError, Node};

pub mod addr;
pub mod name;
pub mod varint;
