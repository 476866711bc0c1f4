//! Domain names and their hashes.
//!
//! Records are not stored under the name itself but under its *node*, a
//! 32 octet hash computed recursively over the labels of the name. This
//! module provides [`Name`], a validated name, and [`Node`], its hash.
//!
//! Names are not normalized here. Whatever case and character policy the
//! naming system applies is left to the backend, so the node is computed
//! over the labels exactly as given.

use crate::utils::base16;
use core::{fmt, str};
use sha3::{Digest, Keccak256};
use std::string::String;

//------------ Name ----------------------------------------------------------

/// A domain name.
///
/// A name is a non-empty sequence of non-empty labels separated by dots.
/// A single trailing dot denoting the root is accepted and removed.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name(String);

impl Name {
    /// Creates a name from a string after checking it.
    pub fn new(s: impl Into<String>) -> Result<Self, NameError> {
        let mut s = s.into();
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if s.split('.').any(str::is_empty) {
            return Err(NameError::EmptyLabel);
        }
        Ok(Name(s))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The labels are returned from left to right, i.e., the top-level
    /// label comes last.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('.')
    }

    /// Computes the node of the name.
    ///
    /// Starting with 32 zero octets, each label from right to left is
    /// hashed and the hash appended to the current node. The node is then
    /// replaced by the hash of the combined 64 octets.
    #[must_use]
    pub fn node(&self) -> Node {
        let mut node = [0u8; 32];
        for label in self.labels().rev() {
            let label_hash = Keccak256::digest(label.as_bytes());
            let mut hasher = Keccak256::new();
            hasher.update(node);
            hasher.update(label_hash);
            node = hasher.finalize().into();
        }
        Node(node)
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s)
    }
}

//--- AsRef

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Name").field(&self.0).finish()
    }
}

//------------ Node ----------------------------------------------------------

/// The hash of a domain name.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node([u8; 32]);

impl Node {
    /// The node of the root.
    pub const ROOT: Node = Node([0; 32]);

    /// Creates a node from its octets.
    #[must_use]
    pub const fn from_octets(octets: [u8; 32]) -> Self {
        Node(octets)
    }

    /// Returns the octets of the node.
    #[must_use]
    pub const fn as_octets(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0x")?;
        base16::display(&self.0, f)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node({})", self)
    }
}

//------------ NameError -----------------------------------------------------

/// A string could not be used as a domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// The name was empty.
    Empty,

    /// The name contained an empty label.
    EmptyLabel,
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::Empty => f.write_str("empty domain name"),
            NameError::EmptyLabel => f.write_str("empty label in domain name"),
        }
    }
}

impl std::error::Error for NameError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn checks() {
        assert_eq!(Name::new("").unwrap_err(), NameError::Empty);
        assert_eq!(Name::new(".").unwrap_err(), NameError::Empty);
        assert_eq!(Name::new("a..eth").unwrap_err(), NameError::EmptyLabel);
        assert_eq!(Name::new(".eth").unwrap_err(), NameError::EmptyLabel);
        assert_eq!(Name::new("vitalik.eth.").unwrap().as_str(), "vitalik.eth");
        assert_eq!("eth".parse::<Name>().unwrap().to_string(), "eth");
    }

    #[test]
    fn labels() {
        let name = Name::new("sub.vitalik.eth").unwrap();
        let labels: std::vec::Vec<_> = name.labels().collect();
        assert_eq!(labels, ["sub", "vitalik", "eth"]);
    }

    #[test]
    fn namehash() {
        assert_eq!(
            Name::new("eth").unwrap().node().to_string(),
            "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
        );
        assert_eq!(
            Name::new("foo.eth").unwrap().node().to_string(),
            "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
        );
    }
}
