//! Account addresses and public keys.

use crate::utils::base16;
use core::{fmt, str};
use sha3::{Digest, Keccak256};

//------------ Address -------------------------------------------------------

/// A 20 octet account address.
///
/// Both resolvers and the address records they hold are identified by
/// such an address. Its text form is the mixed-case checksum encoding of
/// [EIP-55]: the hex digits prefixed with `0x`, where each letter is
/// capitalized if the corresponding nibble of the Keccak-256 hash of the
/// lower case hex digits is eight or larger.
///
/// [EIP-55]: https://eips.ethereum.org/EIPS/eip-55
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address.
    ///
    /// Backends use this address to signal that no resolver or no address
    /// record exists.
    pub const ZERO: Address = Address([0; 20]);

    /// Creates an address from its octets.
    #[must_use]
    pub const fn from_octets(octets: [u8; 20]) -> Self {
        Address(octets)
    }

    /// Creates an address from a slice.
    ///
    /// Returns `None` if the slice isn’t exactly 20 octets long.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        slice.try_into().ok().map(Address)
    }

    /// Returns the octets of the address.
    #[must_use]
    pub const fn as_octets(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns whether this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 20]
    }
}

//--- FromStr

impl str::FromStr for Address {
    type Err = AddressError;

    /// Parses the `0x` prefixed hex form in any case.
    ///
    /// The checksum of mixed-case input is not verified.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;
        let octets =
            base16::decode_vec(digits).map_err(|_| AddressError::BadDigits)?;
        Address::from_slice(&octets).ok_or(AddressError::BadLength)
    }
}

//--- AsRef

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//--- Display and Debug

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = [0u8; 40];
        for (i, octet) in self.0.iter().enumerate() {
            digits[2 * i] = HEX_DIGITS[usize::from(octet >> 4)];
            digits[2 * i + 1] = HEX_DIGITS[usize::from(octet & 0x0F)];
        }
        let hash = Keccak256::digest(digits);

        f.write_str("0x")?;
        for (i, &digit) in digits.iter().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0F
            };
            let digit = if nibble >= 8 {
                digit.to_ascii_uppercase()
            } else {
                digit
            };
            fmt::Write::write_char(f, char::from(digit))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

//------------ PublicKey -----------------------------------------------------

/// A public key given as the x and y coordinates of a curve point.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PublicKey {
    x: [u8; 32],
    y: [u8; 32],
}

impl PublicKey {
    /// Creates a public key from its coordinates.
    #[must_use]
    pub const fn new(x: [u8; 32], y: [u8; 32]) -> Self {
        PublicKey { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> &[u8; 32] {
        &self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> &[u8; 32] {
        &self.y
    }

    /// Returns whether both coordinates are zero.
    ///
    /// Backends return such a key when no key has been set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == [0; 32] && self.y == [0; 32]
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("x", &format_args!("{}", base16::encode_display(&self.x)))
            .field("y", &format_args!("{}", base16::encode_display(&self.y)))
            .finish()
    }
}

//------------ AddressError --------------------------------------------------

/// A string could not be parsed into an address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// The string did not start with `0x`.
    MissingPrefix,

    /// The string contained characters other than hex digits.
    BadDigits,

    /// The string did not encode exactly 20 octets.
    BadLength,
}

//--- Display and Error

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AddressError::MissingPrefix => f.write_str("missing 0x prefix"),
            AddressError::BadDigits => f.write_str("illegal hex digits"),
            AddressError::BadLength => f.write_str("address must be 20 octets"),
        }
    }
}

impl std::error::Error for AddressError {}

//------------ Constants -----------------------------------------------------

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

//============ Test ==========================================================
