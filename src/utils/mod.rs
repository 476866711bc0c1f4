//! Various utility modules.
//!
//! These provide the text encodings needed to render binary record data:
//! hex digits for raw octets and the multibase alphabets used by content
//! identifiers.

pub mod base16;
pub mod base32;
pub mod base58;

pub use self::base16::DecodeError;
