//! Decoding and encoding of base 58 using the Bitcoin alphabet.
//!
//! Base 58 is not a power of two base, so unlike the [base 16] and
//! [base 32] codecs it cannot process input in fixed-size groups. Both
//! directions instead treat the data as one big-endian number and convert
//! it digit by digit. Leading zero octets are represented by leading ‘1’
//! characters and vice versa.
//!
//! This is the encoding of version 0 content identifiers and the `z`
//! multibase.
//!
//! [base 16]: super::base16
//! [base 32]: super::base32

use core::fmt;
use std::string::String;
use std::vec::Vec;

//------------ Re-exports ----------------------------------------------------

pub use super::base16::DecodeError;

//------------ Convenience Functions -----------------------------------------

/// Decodes a string with base 58 encoded data into a vec.
pub fn decode_vec(s: &str) -> Result<Vec<u8>, DecodeError> {
    let zeros = s.chars().take_while(|&ch| ch == '1').count();

    // Little-endian digits of the number in base 256.
    let mut num: Vec<u8> = Vec::with_capacity(s.len());
    for ch in s.chars().skip(zeros) {
        let mut carry = decode_char(ch)? as u32;
        for octet in num.iter_mut() {
            carry += u32::from(*octet) * 58;
            *octet = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            num.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut res = Vec::with_capacity(zeros + num.len());
    res.resize(zeros, 0);
    res.extend(num.iter().rev());
    Ok(res)
}

/// Encodes binary data in base 58 and writes it into a format stream.
pub fn display<B, W>(bytes: &B, f: &mut W) -> fmt::Result
where
    B: AsRef<[u8]> + ?Sized,
    W: fmt::Write,
{
    let bytes = bytes.as_ref();
    let zeros = bytes.iter().take_while(|&&octet| octet == 0).count();

    // Little-endian digits of the number in base 58.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    for &octet in &bytes[zeros..] {
        let mut carry = u32::from(octet);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    for _ in 0..zeros {
        f.write_char('1')?;
    }
    for &digit in digits.iter().rev() {
        f.write_char(ENCODE_ALPHABET[usize::from(digit)] as char)?;
    }
    Ok(())
}

/// Encodes binary data in base 58 and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity(bytes.as_ref().len() * 138 / 100 + 1);
    let _ = display(bytes, &mut res);
    res
}

/// Returns a placeholder value that implements `Display` for encoded data.
pub fn encode_display<Octets: AsRef<[u8]> + ?Sized>(
    octets: &Octets,
) -> impl fmt::Display + '_ {
    struct Display<'a>(&'a [u8]);

    impl<'a> fmt::Display for Display<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            display(self.0, f)
        }
    }

    Display(octets.as_ref())
}

fn decode_char(ch: char) -> Result<u8, DecodeError> {
    if ch > (127 as char) {
        return Err(DecodeError::IllegalChar(ch));
    }
    match DECODE_ALPHABET[ch as usize] {
        0xFF => Err(DecodeError::IllegalChar(ch)),
        val => Ok(val),
    }
}

//------------ Constants -----------------------------------------------------

/// The Bitcoin alphabet.
///
/// It leaves out ‘0’, ‘O’, ‘I’, and ‘l’.
const ENCODE_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The alphabet used for decoding.
///
/// This maps encoding characters into their values. A value of 0xFF stands in
/// for illegal characters.
const DECODE_ALPHABET: [u8; 128] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x00 .. 0x07
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x08 .. 0x0F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x10 .. 0x17
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x18 .. 0x1F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x20 .. 0x27
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x28 .. 0x2F
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x30 .. 0x37
    0x07, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x38 .. 0x3F
    0xFF, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, // 0x40 .. 0x47
    0x10, 0xFF, 0x11, 0x12, 0x13, 0x14, 0x15, 0xFF, // 0x48 .. 0x4F
    0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, // 0x50 .. 0x57
    0x1e, 0x1f, 0x20, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x58 .. 0x5F
    0xFF, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, // 0x60 .. 0x67
    0x28, 0x29, 0x2a, 0x2b, 0xFF, 0x2c, 0x2d, 0x2e, // 0x68 .. 0x6F
    0x2f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, // 0x70 .. 0x77
    0x37, 0x38, 0x39, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x78 .. 0x7F
];

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"\x00"), "1");
        assert_eq!(encode_string(b"\x00\x00\x01"), "112");
        assert_eq!(encode_string(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(encode_string(b"\xff"), "5Q");
    }

    #[test]
    fn decode() {
        assert_eq!(decode_vec("").unwrap(), b"");
        assert_eq!(decode_vec("1").unwrap(), b"\x00");
        assert_eq!(decode_vec("112").unwrap(), b"\x00\x00\x01");
        assert_eq!(decode_vec("StV1DL6CwTryKyV").unwrap(), b"hello world");
        assert_eq!(decode_vec("5Q").unwrap(), b"\xff");
        assert_eq!(decode_vec("0OIl"), Err(DecodeError::IllegalChar('0')));
        assert_eq!(decode_vec("5l"), Err(DecodeError::IllegalChar('l')));
    }

    #[test]
    fn alphabets_agree() {
        for (value, &ch) in ENCODE_ALPHABET.iter().enumerate() {
            assert_eq!(usize::from(DECODE_ALPHABET[ch as usize]), value);
        }
    }
}
