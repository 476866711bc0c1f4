//! Unsigned variable length integers.
//!
//! Multiformats encode integers as unsigned LEB128: seven bits per octet,
//! least significant group first, with the most significant bit of each
//! octet set if another octet follows. The multiformats definition caps
//! the encoding at nine octets, i.e., 63 bits of value.
//!
//! An encoding is minimal if its last octet is not zero, unless that octet
//! is the only one. [`parse`] accepts non-minimal encodings while
//! [`parse_minimal`] rejects them. Only minimal encodings are produced.

use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::{Parser, ShortInput};

/// The maximum number of octets a varint may occupy.
pub const MAX_LEN: usize = 9;

/// Takes a varint from the beginning of a parser.
///
/// On error, the parser may have been advanced past part of the varint.
pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
) -> Result<u64, VarintError> {
    let mut res = 0u64;
    for i in 0..MAX_LEN {
        let octet = parser.parse_u8()?;
        res |= u64::from(octet & 0x7F) << (7 * i);
        if octet & 0x80 == 0 {
            return Ok(res);
        }
    }
    Err(VarintError::Overflow)
}

/// Takes a minimally encoded varint from the beginning of a parser.
///
/// This is the form required inside content identifiers and multihashes.
pub fn parse_minimal<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
) -> Result<u64, VarintError> {
    let mut res = 0u64;
    for i in 0..MAX_LEN {
        let octet = parser.parse_u8()?;
        res |= u64::from(octet & 0x7F) << (7 * i);
        if octet & 0x80 == 0 {
            if i > 0 && octet == 0 {
                return Err(VarintError::NotMinimal);
            }
            return Ok(res);
        }
    }
    Err(VarintError::Overflow)
}

/// Takes a varint from the beginning of a slice.
///
/// Returns the value and the remainder of the slice.
pub fn split(octets: &[u8]) -> Result<(u64, &[u8]), VarintError> {
    let mut parser = Parser::from_ref(octets);
    let value = parse(&mut parser)?;
    Ok((value, &octets[parser.pos()..]))
}

/// Appends the minimal varint encoding of `value` to `target`.
///
/// # Panics
///
/// Values that need more than 63 bits cannot be represented. In debug
/// builds, encoding such a value panics.
pub fn compose<Target: OctetsBuilder + ?Sized>(
    value: u64,
    target: &mut Target,
) -> Result<(), Target::AppendError> {
    debug_assert!(value < 1 << 63);
    let mut value = value;
    loop {
        let octet = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            return target.append_slice(&[octet]);
        }
        target.append_slice(&[octet | 0x80])?;
    }
}

/// Returns the number of octets the minimal encoding of `value` needs.
#[must_use]
pub fn compose_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    core::cmp::max(1, (bits + 6) / 7)
}

//------------ VarintError ---------------------------------------------------

/// A varint could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VarintError {
    /// The input ended before the final octet of the varint.
    ShortInput,

    /// The varint is longer than nine octets.
    Overflow,

    /// The varint has trailing zero groups.
    NotMinimal,
}

impl From<ShortInput> for VarintError {
    fn from(_: ShortInput) -> Self {
        VarintError::ShortInput
    }
}

//--- Display and Error

impl fmt::Display for VarintError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            VarintError::ShortInput => f.write_str("truncated varint"),
            VarintError::Overflow => f.write_str("varint too long"),
            VarintError::NotMinimal => f.write_str("varint not minimal"),
        }
    }
}

impl std::error::Error for VarintError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::vec::Vec;

    fn encoded(value: u64) -> Vec<u8> {
        let mut res = Vec::new();
        compose(value, &mut res).unwrap();
        res
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encoded(0), b"\x00");
        assert_eq!(encoded(1), b"\x01");
        assert_eq!(encoded(127), b"\x7f");
        assert_eq!(encoded(128), b"\x80\x01");
        assert_eq!(encoded(255), b"\xff\x01");
        assert_eq!(encoded(0xe3), b"\xe3\x01");
        assert_eq!(encoded(300), b"\xac\x02");
        assert_eq!(encoded(16384), b"\x80\x80\x01");
        assert_eq!(encoded(0xb29910), b"\x90\xb2\xca\x05");
    }

    #[test]
    fn compose_len_matches() {
        for value in [0, 1, 127, 128, 16383, 16384, 0xb29910, (1 << 63) - 1] {
            assert_eq!(compose_len(value), encoded(value).len());
        }
    }

    #[test]
    fn split_values() {
        assert_eq!(split(b"\xe3\x01\x01\x70").unwrap(), (0xe3, &b"\x01\x70"[..]));
        assert_eq!(split(b"\x00").unwrap(), (0, &b""[..]));
        // Non-minimal encodings are tolerated.
        assert_eq!(split(b"\x81\x00").unwrap(), (1, &b""[..]));
        assert_eq!(
            split(b"\xff\xff\xff\xff\xff\xff\xff\xff\x7f").unwrap(),
            ((1 << 63) - 1, &b""[..])
        );
    }

    #[test]
    fn minimal_only() {
        fn parse_min(octets: &[u8]) -> Result<u64, VarintError> {
            parse_minimal(&mut Parser::from_ref(octets))
        }

        assert_eq!(parse_min(b"\x00"), Ok(0));
        assert_eq!(parse_min(b"\x70"), Ok(0x70));
        assert_eq!(parse_min(b"\x80\x01"), Ok(128));
        assert_eq!(parse_min(b"\x90\xb2\xca\x05"), Ok(0xb29910));
        assert_eq!(parse_min(b"\x81\x00"), Err(VarintError::NotMinimal));
        assert_eq!(parse_min(b"\x80\x00"), Err(VarintError::NotMinimal));
        assert_eq!(
            parse_min(b"\xf0\x80\x00"),
            Err(VarintError::NotMinimal)
        );
        assert_eq!(parse_min(b"\x81"), Err(VarintError::ShortInput));
        assert_eq!(VarintError::NotMinimal.to_string(), "varint not minimal");
    }

    #[test]
    fn split_errors() {
        assert_eq!(split(b""), Err(VarintError::ShortInput));
        assert_eq!(split(b"\x80"), Err(VarintError::ShortInput));
        assert_eq!(split(b"\xe3"), Err(VarintError::ShortInput));
        assert_eq!(
            split(b"\x80\x80\x80\x80\x80\x80\x80\x80\x80\x01"),
            Err(VarintError::Overflow)
        );
    }
}
