//! Decoding multicodec content pointers.
//!
//! A content pointer is a piece of binary data tagged with its
//! interpretation: an unsigned varint multicodec followed by the payload.
//! The multicodec table grows over time, so decoding has to cope with
//! payloads it knows nothing about.
//!
//! [`decode`] strips the codec, looks up its registered name, and renders
//! the payload according to that name. Content identifier namespaces are
//! rendered as the text form of the [`Cid`] in the payload. Every other
//! codec falls back to the payload’s hex digits, a rendering that cannot
//! fail.
//!
//! Which codecs get special rendering is determined by the [`RENDERINGS`]
//! table alone. Adding a codec to it is all that is needed to change how
//! its payloads are shown.

use crate::base::varint::VarintError;
use crate::cid::{Cid, CidError};
use crate::utils::base16;
use core::fmt;
use octseq::parse::Parser;
use std::string::{String, ToString};
use std::vec::Vec;
use tracing::{debug, trace};

pub use self::codec::Codec;

#[macro_use]
mod macros;
mod codec;

//------------ Rendering -----------------------------------------------------

/// How the payload of a content pointer is turned into text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rendering {
    /// The payload is a content identifier shown in its canonical form.
    ContentId,

    /// The payload is shown as lower case hex digits.
    Hex,
}

impl Rendering {
    /// Returns the rendering for the codec with the given name.
    ///
    /// Names not listed in [`RENDERINGS`] are rendered as hex.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        RENDERINGS
            .iter()
            .find(|(item, _)| *item == name)
            .map(|(_, rendering)| *rendering)
            .unwrap_or(Rendering::Hex)
    }

    /// Renders a payload.
    pub fn render(self, payload: &[u8]) -> Result<String, CidError> {
        match self {
            Rendering::ContentId => {
                Cid::from_slice(payload).map(|cid| cid.to_string())
            }
            Rendering::Hex => Ok(base16::encode_string(payload)),
        }
    }
}

/// The codecs rendered other than as hex, by name.
pub const RENDERINGS: &[(&str, Rendering)] = &[
    ("ipfs-ns", Rendering::ContentId),
    ("ipns-ns", Rendering::ContentId),
];

//------------ decode --------------------------------------------------------

/// Decodes a content pointer.
///
/// Fails if the leading varint is missing or truncated, if the codec
/// isn’t registered, or if a content identifier payload is malformed.
pub fn decode(octets: &[u8]) -> Result<DecodedAddress, DecodeError> {
    let mut parser = Parser::from_ref(octets);
    let codec = Codec::parse(&mut parser)?;
    let payload = &octets[parser.pos()..];
    let codec_name = codec.to_name().ok_or(DecodeError::UnknownCodec(codec))?;
    trace!(codec = codec_name, len = payload.len(), "content pointer");

    let address = Rendering::for_name(codec_name).render(payload).map_err(
        |err| {
            debug!(codec = codec_name, %err, "invalid content identifier");
            DecodeError::InvalidContentId(err)
        },
    )?;
    debug!(codec = codec_name, %address, "content pointer decoded");
    Ok(DecodedAddress {
        codec,
        codec_name,
        address,
    })
}

/// Creates a content pointer from a codec and its payload.
#[must_use]
pub fn add_codec(codec: Codec, payload: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(codec.compose_len() + payload.len());
    let _ = codec.compose(&mut res);
    res.extend_from_slice(payload);
    res
}

//------------ DecodedAddress ------------------------------------------------

/// A decoded content pointer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedAddress {
    codec: Codec,
    codec_name: &'static str,
    address: String,
}

impl DecodedAddress {
    /// Returns the codec of the content pointer.
    #[must_use]
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Returns the registered name of the codec.
    #[must_use]
    pub fn codec_name(&self) -> &'static str {
        self.codec_name
    }

    /// Returns the rendered payload.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Converts the value into the rendered payload.
    #[must_use]
    pub fn into_address(self) -> String {
        self.address
    }
}

//------------ DecodeError ---------------------------------------------------

/// A content pointer could not be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The codec varint was missing, truncated, or too long.
    Malformed(VarintError),

    /// The codec is not registered.
    UnknownCodec(Codec),

    /// The payload should have been a content identifier but wasn’t.
    InvalidContentId(CidError),
}

impl From<VarintError> for DecodeError {
    fn from(err: VarintError) -> Self {
        DecodeError::Malformed(err)
    }
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::Malformed(ref err) => {
                write!(f, "malformed content pointer: {}", err)
            }
            DecodeError::UnknownCodec(codec) => {
                write!(f, "unknown codec {}", codec)
            }
            DecodeError::InvalidContentId(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Malformed(err) => Some(err),
            DecodeError::UnknownCodec(_) => None,
            DecodeError::InvalidContentId(err) => Some(err),
        }
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::cid::Multihash;

    const V0_MULTIHASH: &str = "122029f2d17be6139079dc48696d1f582a8530eb9805b561eda517e22a892c7e3f1f";

    #[test]
    fn ipfs_v1() {
        let octets = base16::decode_vec(&format!("e3010170{}", V0_MULTIHASH))
            .unwrap();
        let decoded = decode(&octets).unwrap();
        assert_eq!(decoded.codec(), Codec::IPFS_NS);
        assert_eq!(decoded.codec_name(), "ipfs-ns");
        assert_eq!(
            decoded.address(),
            "bafybeibj6lixxzqtsb45ysdjnupvqkufgdvzqbnvmhw2kf7cfkesy7r7d4"
        );

        // The rendered identifier casts back to the payload.
        let cid: Cid = decoded.address().parse().unwrap();
        assert_eq!(cid.as_slice(), &octets[2..]);
    }

    #[test]
    fn ipfs_v0() {
        let payload = base16::decode_vec(V0_MULTIHASH).unwrap();
        let octets = add_codec(Codec::IPFS_NS, &payload);
        assert_eq!(&octets[..2], b"\xe3\x01");
        assert_eq!(
            decode(&octets).unwrap().address(),
            "QmRAQB6YaCyidP37UdDnjFY5vQuiBrcqdyoW1CuDgwxkD4"
        );
    }

    #[test]
    fn ipns() {
        let cid = Cid::new_v1(
            Codec::LIBP2P_KEY,
            Multihash::new(
                Codec::IDENTITY,
                base16::decode_vec(
                    "080112203b6a27bcceb6a42d62a3a8d02a6f0d73\
                     653215771de243a63ac048a18b59da29",
                )
                .unwrap(),
            ),
        );
        let decoded =
            decode(&add_codec(Codec::IPNS_NS, cid.as_slice())).unwrap();
        assert_eq!(decoded.codec_name(), "ipns-ns");
        assert_eq!(
            decoded.into_address(),
            "bafzaajaiaejcao3ke66m5nvefvrkhkgqfjxq243fgikxohpciotdvqciugfvtwrj"
        );
    }

    #[test]
    fn hex_fallback() {
        let mut swept = 0;
        for &codec in Codec::ALL {
            let name = codec.to_name().unwrap();
            if Rendering::for_name(name) == Rendering::ContentId {
                continue;
            }
            for payload in [&b""[..], b"\x00", b"\xDE\xAD\xbe\xef\x01"] {
                let decoded = decode(&add_codec(codec, payload)).unwrap();
                assert_eq!(decoded.codec(), codec);
                assert_eq!(decoded.codec_name(), name);
                assert_eq!(
                    decoded.address(),
                    base16::encode_string(payload),
                    "{}",
                    name
                );
            }
            swept += 1;
        }
        assert_eq!(swept, Codec::ALL.len() - RENDERINGS.len());
        assert_eq!(
            decode(b"\xe4\x01\xAB\xcd").unwrap().address(),
            "abcd"
        );
    }

    #[test]
    fn dnslink() {
        let decoded = decode(b"\xe8\x01\xab").unwrap();
        assert_eq!(decoded.codec(), Codec::DNSLINK);
        assert_eq!(decoded.codec_name(), "dnslink");
        assert_eq!(decoded.address(), "ab");
    }

    #[test]
    fn malformed() {
        assert_eq!(
            decode(b""),
            Err(DecodeError::Malformed(VarintError::ShortInput))
        );
        assert_eq!(
            decode(b"\xe3"),
            Err(DecodeError::Malformed(VarintError::ShortInput))
        );
        assert_eq!(
            decode(b"\xff\xff\xff\xff\xff\xff\xff\xff\xff\x01"),
            Err(DecodeError::Malformed(VarintError::Overflow))
        );
    }

    #[test]
    fn unknown_codec() {
        assert_eq!(
            decode(b"\xf0\xff\x01\x00"),
            Err(DecodeError::UnknownCodec(Codec::from_int(0x7ff0)))
        );
    }

    #[test]
    fn invalid_content_id() {
        assert!(matches!(
            decode(b"\xe3\x01"),
            Err(DecodeError::InvalidContentId(_))
        ));
        assert_eq!(
            decode(b"\xe5\x01\x02\x70\x12\x00"),
            Err(DecodeError::InvalidContentId(
                CidError::UnsupportedVersion(2)
            ))
        );
        assert_eq!(
            decode(b"\xe3\x01\x12\x20\x00"),
            Err(DecodeError::InvalidContentId(CidError::ShortDigest))
        );

        // The codec prefix may be padded but the identifier may not.
        let mut octets = b"\xe3\x81\x00\x01\x70\x12\x20".to_vec();
        octets.extend_from_slice(&[0; 32]);
        assert_eq!(decode(&octets).unwrap().codec(), Codec::IPFS_NS);
        let mut octets = b"\xe3\x01\x81\x00\x70\x12\x20".to_vec();
        octets.extend_from_slice(&[0; 32]);
        assert_eq!(
            decode(&octets),
            Err(DecodeError::InvalidContentId(CidError::Varint(
                VarintError::NotMinimal
            )))
        );
    }

    #[test]
    fn renderings() {
        assert_eq!(Rendering::for_name("ipfs-ns"), Rendering::ContentId);
        assert_eq!(Rendering::for_name("ipns-ns"), Rendering::ContentId);
        assert_eq!(Rendering::for_name("swarm-ns"), Rendering::Hex);
        assert_eq!(Rendering::for_name("IPFS-NS"), Rendering::Hex);
    }
}
