//! Content identifiers.
//!
//! A content identifier is a self-describing reference to content-addressed
//! data. It consists of a version, the multicodec of the referenced content,
//! and a multihash of that content. Two versions exist:
//!
//! * version 0 is a bare SHA-256 multihash of `dag-pb` content, 34 octets
//!   starting with `0x12 0x20`. Its text form is the base 58 encoding of
//!   those octets, which always starts with `Qm`.
//! * version 1 starts with the varint `1`, followed by the content codec
//!   varint and the multihash. Its text form is a multibase string,
//!   canonically `b` followed by lower case base 32 without padding.
//!
//! A multihash is the varint hash function code, the varint digest length,
//! and the digest itself.
//!
//! All varints inside a content identifier must be minimally encoded.
//!
//! [`Cid`] keeps the octets it was parsed from. Its text form is generated
//! from those octets, so parsing the text form again results in the exact
//! same octets.

use crate::base::varint::{self, VarintError};
use crate::multicodec::Codec;
use crate::utils::{base32, base58, DecodeError};
use core::{fmt, str};
use octseq::parse::Parser;
use std::vec::Vec;

//------------ Cid -----------------------------------------------------------

/// A content identifier.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Cid {
    /// The complete binary form.
    octets: Vec<u8>,

    /// The version.
    version: Version,

    /// The multicodec of the content.
    codec: Codec,

    /// The multihash of the content.
    hash: Multihash,
}

impl Cid {
    /// Creates a content identifier from its binary form.
    ///
    /// The entire slice must be one content identifier. Trailing octets
    /// are an error.
    pub fn from_slice(octets: &[u8]) -> Result<Self, CidError> {
        if octets.len() > 2
            && octets[0] == Codec::SHA2_256.to_int() as u8
            && octets[1] == 32
        {
            return match octets.len() {
                34 => Ok(Cid {
                    octets: octets.into(),
                    version: Version::V0,
                    codec: Codec::DAG_PB,
                    hash: Multihash {
                        code: Codec::SHA2_256,
                        digest: octets[2..].into(),
                    },
                }),
                len if len < 34 => Err(CidError::ShortDigest),
                _ => Err(CidError::TrailingData),
            };
        }

        let mut parser = Parser::from_ref(octets);
        match varint::parse_minimal(&mut parser)? {
            1 => {}
            version => return Err(CidError::UnsupportedVersion(version)),
        }
        let codec = Codec::from_int(varint::parse_minimal(&mut parser)?);
        let hash = Multihash::parse(&mut parser)?;
        if parser.remaining() != 0 {
            return Err(CidError::TrailingData);
        }
        Ok(Cid {
            octets: octets.into(),
            version: Version::V1,
            codec,
            hash,
        })
    }

    /// Creates a version 1 content identifier.
    #[must_use]
    pub fn new_v1(codec: Codec, hash: Multihash) -> Self {
        let mut octets = Vec::with_capacity(
            1 + codec.compose_len() + hash.compose_len(),
        );
        let _ = varint::compose(1, &mut octets);
        let _ = codec.compose(&mut octets);
        let _ = hash.compose(&mut octets);
        Cid {
            octets,
            version: Version::V1,
            codec,
            hash,
        }
    }

    /// Returns the version.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the multicodec of the referenced content.
    #[must_use]
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Returns the multihash of the referenced content.
    #[must_use]
    pub fn hash(&self) -> &Multihash {
        &self.hash
    }

    /// Returns the binary form.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }
}

//--- FromStr

impl str::FromStr for Cid {
    type Err = CidError;

    /// Parses the text form of a content identifier.
    ///
    /// Recognizes the version 0 base 58 form and the `b` and `B` (base 32)
    /// and `z` (base 58) multibase prefixes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 46 && s.starts_with("Qm") {
            return Cid::from_slice(&base58::decode_vec(s)?);
        }
        let mut chars = s.chars();
        let octets = match chars.next() {
            Some('b') | Some('B') => base32::decode_vec(chars.as_str())?,
            Some('z') => base58::decode_vec(chars.as_str())?,
            Some(ch) => return Err(CidError::UnsupportedMultibase(ch)),
            None => return Err(CidError::ShortInput),
        };
        Cid::from_slice(&octets)
    }
}

//--- AsRef

impl AsRef<[u8]> for Cid {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Display and Debug

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.version {
            Version::V0 => base58::display(&self.octets, f),
            Version::V1 => {
                f.write_str("b")?;
                base32::display(&self.octets, f)
            }
        }
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cid")
            .field("version", &self.version)
            .field("codec", &self.codec)
            .field("hash", &self.hash)
            .finish()
    }
}

//------------ Version -------------------------------------------------------

/// The version of a content identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Version {
    /// A bare SHA-256 multihash implying the `dag-pb` codec.
    V0,

    /// A versioned identifier with explicit codec.
    V1,
}

//------------ Multihash -----------------------------------------------------

/// A self-describing hash value.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Multihash {
    /// The hash function.
    code: Codec,

    /// The digest.
    digest: Vec<u8>,
}

impl Multihash {
    /// Creates a multihash from a hash function code and a digest.
    #[must_use]
    pub fn new(code: Codec, digest: impl Into<Vec<u8>>) -> Self {
        Multihash {
            code,
            digest: digest.into(),
        }
    }

    /// Takes a multihash from the beginning of a parser.
    ///
    /// The digest must be present in full. Anything following it is left
    /// in the parser.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, CidError> {
        let code = Codec::from_int(varint::parse_minimal(parser)?);
        let len = varint::parse_minimal(parser)?;
        let len = match usize::try_from(len) {
            Ok(len) if len <= parser.remaining() => len,
            _ => return Err(CidError::ShortDigest),
        };
        let mut digest = std::vec![0u8; len];
        parser
            .parse_buf(&mut digest)
            .map_err(|_| CidError::ShortDigest)?;
        Ok(Multihash { code, digest })
    }

    /// Returns the hash function.
    #[must_use]
    pub fn code(&self) -> Codec {
        self.code
    }

    /// Returns the digest.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Appends the binary form to `target`.
    pub fn compose<Target: octseq::builder::OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.code.compose(target)?;
        varint::compose(self.digest.len() as u64, target)?;
        target.append_slice(&self.digest)
    }

    /// Returns the length of the binary form.
    #[must_use]
    pub fn compose_len(&self) -> usize {
        self.code.compose_len()
            + varint::compose_len(self.digest.len() as u64)
            + self.digest.len()
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Multihash")
            .field("code", &self.code)
            .field(
                "digest",
                &format_args!(
                    "{}",
                    crate::utils::base16::encode_display(&self.digest)
                ),
            )
            .finish()
    }
}

//------------ CidError ------------------------------------------------------

/// Data was not a well-formed content identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CidError {
    /// The input was empty.
    ShortInput,

    /// A varint field was truncated, too long, or not minimally encoded.
    Varint(VarintError),

    /// The version is neither the implicit version 0 nor 1.
    UnsupportedVersion(u64),

    /// The multihash digest is shorter than its length field claims.
    ShortDigest,

    /// There was data after the multihash.
    TrailingData,

    /// The text form used an unsupported multibase prefix.
    UnsupportedMultibase(char),

    /// The text form was not properly encoded.
    Text(DecodeError),
}

impl From<VarintError> for CidError {
    fn from(err: VarintError) -> Self {
        CidError::Varint(err)
    }
}

impl From<DecodeError> for CidError {
    fn from(err: DecodeError) -> Self {
        CidError::Text(err)
    }
}

//--- Display and Error

impl fmt::Display for CidError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CidError::ShortInput => f.write_str("empty content identifier"),
            CidError::Varint(ref err) => {
                write!(f, "invalid content identifier: {}", err)
            }
            CidError::UnsupportedVersion(version) => {
                write!(f, "unsupported content identifier version {}", version)
            }
            CidError::ShortDigest => {
                f.write_str("multihash digest shorter than its length")
            }
            CidError::TrailingData => {
                f.write_str("trailing data after content identifier")
            }
            CidError::UnsupportedMultibase(ch) => {
                write!(f, "unsupported multibase prefix '{}'", ch)
            }
            CidError::Text(ref err) => {
                write!(f, "invalid content identifier text: {}", err)
            }
        }
    }
}

impl std::error::Error for CidError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CidError::Varint(err) => Some(err),
            CidError::Text(err) => Some(err),
            _ => None,
        }
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::base16;
    use std::string::ToString;

    const V0_OCTETS: &str = "122029f2d17be6139079dc48696d1f582a8530eb9805b561eda517e22a892c7e3f1f";
    const V0_TEXT: &str = "QmRAQB6YaCyidP37UdDnjFY5vQuiBrcqdyoW1CuDgwxkD4";

    #[test]
    fn version_0() {
        let octets = base16::decode_vec(V0_OCTETS).unwrap();
        let cid = Cid::from_slice(&octets).unwrap();
        assert_eq!(cid.version(), Version::V0);
        assert_eq!(cid.codec(), Codec::DAG_PB);
        assert_eq!(cid.hash().code(), Codec::SHA2_256);
        assert_eq!(cid.hash().digest(), &octets[2..]);
        assert_eq!(cid.to_string(), V0_TEXT);
        assert_eq!(V0_TEXT.parse::<Cid>().unwrap(), cid);
    }

    #[test]
    fn version_1() {
        let octets = base16::decode_vec(&format!("0170{}", V0_OCTETS)).unwrap();
        let cid = Cid::from_slice(&octets).unwrap();
        assert_eq!(cid.version(), Version::V1);
        assert_eq!(cid.codec(), Codec::DAG_PB);
        assert_eq!(
            cid.to_string(),
            "bafybeibj6lixxzqtsb45ysdjnupvqkufgdvzqbnvmhw2kf7cfkesy7r7d4"
        );
        let back: Cid = cid.to_string().parse().unwrap();
        assert_eq!(back.as_slice(), octets.as_slice());
    }

    #[test]
    fn identity_multihash() {
        let octets = base16::decode_vec(
            "01720024080112203b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29"
        ).unwrap();
        let cid = Cid::from_slice(&octets).unwrap();
        assert_eq!(cid.codec(), Codec::LIBP2P_KEY);
        assert_eq!(cid.hash().code(), Codec::IDENTITY);
        assert_eq!(cid.hash().digest().len(), 0x24);
        assert_eq!(
            cid.to_string(),
            "bafzaajaiaejcao3ke66m5nvefvrkhkgqfjxq243fgikxohpciotdvqciugfvtwrj"
        );
    }

    #[test]
    fn new_v1() {
        let digest: Vec<u8> = (0u8..32).collect();
        let cid = Cid::new_v1(Codec::RAW, Multihash::new(Codec::SHA2_256, digest));
        assert_eq!(
            base16::encode_string(cid.as_slice()),
            "01551220000102030405060708090a0b0c0d0e0f\
             101112131415161718191a1b1c1d1e1f"
        );
        assert_eq!(
            cid.to_string(),
            "bafkreiaaaebagbafaydqqcikbmga2dqpcaireeyuculbogazdinryhi6d4"
        );
        assert_eq!(Cid::from_slice(cid.as_slice()).unwrap(), cid);
    }

    #[test]
    fn malformed() {
        assert_eq!(
            Cid::from_slice(b""),
            Err(CidError::Varint(VarintError::ShortInput))
        );
        assert_eq!(Cid::from_slice(b"\x12\x20\x00"), Err(CidError::ShortDigest));
        assert_eq!(
            Cid::from_slice(b"\x02\x70\x12\x00"),
            Err(CidError::UnsupportedVersion(2))
        );
        assert_eq!(
            Cid::from_slice(b"\x00\x70\x12\x00"),
            Err(CidError::UnsupportedVersion(0))
        );
        assert_eq!(
            Cid::from_slice(b"\x01\x70\x12\x20\xaa"),
            Err(CidError::ShortDigest)
        );
        assert_eq!(
            Cid::from_slice(b"\x01\x55\x00\x01\xaa\xbb"),
            Err(CidError::TrailingData)
        );
        assert_eq!(
            Cid::from_slice(b"\x01\x70"),
            Err(CidError::Varint(VarintError::ShortInput))
        );
        let mut long_v0 = base16::decode_vec(V0_OCTETS).unwrap();
        long_v0.push(0);
        assert_eq!(Cid::from_slice(&long_v0), Err(CidError::TrailingData));
    }

    #[test]
    fn non_minimal_varints() {
        let digest = [0u8; 32];
        let with_digest = |head: &[u8]| {
            let mut octets = head.to_vec();
            octets.extend_from_slice(&digest);
            Cid::from_slice(&octets)
        };
        let not_minimal = Err(CidError::Varint(VarintError::NotMinimal));

        assert!(with_digest(b"\x01\x70\x12\x20").is_ok());
        // Version.
        assert_eq!(with_digest(b"\x81\x00\x70\x12\x20"), not_minimal);
        // Content codec.
        assert_eq!(with_digest(b"\x01\xf0\x00\x12\x20"), not_minimal);
        // Hash function code.
        assert_eq!(with_digest(b"\x01\x70\x92\x00\x20"), not_minimal);
        // Digest length.
        assert_eq!(with_digest(b"\x01\x70\x12\xa0\x00"), not_minimal);
    }

    #[test]
    fn malformed_text() {
        assert_eq!("".parse::<Cid>(), Err(CidError::ShortInput));
        assert_eq!(
            "fabc".parse::<Cid>(),
            Err(CidError::UnsupportedMultibase('f'))
        );
        assert_eq!(
            "b0".parse::<Cid>(),
            Err(CidError::Text(DecodeError::IllegalChar('0')))
        );
    }
}
