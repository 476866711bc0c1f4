//! The output of attribute resolution.

use core::fmt;
use std::string::String;
use std::vec::Vec;

//------------ Field ---------------------------------------------------------

/// A field of the output.
///
/// Each attribute produces a fixed set of fields. No field is produced by
/// more than one attribute.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
    /// The address record in checksummed form.
    Address,

    /// The hex digits of the raw content pointer.
    Contenthash,

    /// The registered name of the content pointer’s codec.
    ContenthashCodec,

    /// The decoded payload of the content pointer.
    ContenthashAddress,

    /// The hex digits of the x coordinate of the public key.
    PublicKeyX,

    /// The hex digits of the y coordinate of the public key.
    PublicKeyY,

    /// The address of the domain’s resolver in checksummed form.
    ResolverAddress,
}

impl Field {
    /// Returns the name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Address => "Address",
            Field::Contenthash => "Contenthash",
            Field::ContenthashCodec => "Contenthash-Codec",
            Field::ContenthashAddress => "Contenthash-Address",
            Field::PublicKeyX => "Public-Key-X",
            Field::PublicKeyY => "Public-Key-Y",
            Field::ResolverAddress => "Resolver-Address",
        }
    }

    /// Returns the name of the HTTP header carrying the field.
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Field::Address => "X-ENS-Address",
            Field::Contenthash => "X-ENS-Contenthash",
            Field::ContenthashCodec => "X-ENS-Contenthash-Codec",
            Field::ContenthashAddress => "X-ENS-Contenthash-Address",
            Field::PublicKeyX => "X-ENS-Public-Key-X",
            Field::PublicKeyY => "X-ENS-Public-Key-Y",
            Field::ResolverAddress => "X-ENS-Resolver-Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

//------------ Sink ----------------------------------------------------------

/// A type receiving output fields.
///
/// Fields are written in the order they are produced.
pub trait Sink {
    /// Writes the value of a field.
    fn write(&mut self, field: Field, value: String);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, field: Field, value: String) {
        (**self).write(field, value)
    }
}

impl Sink for Vec<(Field, String)> {
    fn write(&mut self, field: Field, value: String) {
        self.push((field, value))
    }
}

//------------ AttributeResult -----------------------------------------------

/// The fields produced for a sequence of attributes.
///
/// The fields are kept in the order they were written.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttributeResult {
    fields: Vec<(Field, String)>,
}

impl AttributeResult {
    /// Creates a new, empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field if it is present.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|(item, _)| *item == field)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over the fields and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Returns an iterator over header names and values.
    pub fn headers(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.iter().map(|(field, value)| (field.header_name(), value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the result into its fields.
    #[must_use]
    pub fn into_vec(self) -> Vec<(Field, String)> {
        self.fields
    }
}

impl Sink for AttributeResult {
    fn write(&mut self, field: Field, value: String) {
        self.fields.push((field, value))
    }
}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for AttributeResult {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::string::ToString;

    #[test]
    fn names() {
        assert_eq!(Field::PublicKeyX.name(), "Public-Key-X");
        assert_eq!(
            Field::ContenthashCodec.header_name(),
            "X-ENS-Contenthash-Codec"
        );
        for field in [
            Field::Address,
            Field::Contenthash,
            Field::ContenthashCodec,
            Field::ContenthashAddress,
            Field::PublicKeyX,
            Field::PublicKeyY,
            Field::ResolverAddress,
        ] {
            assert_eq!(
                field.header_name(),
                format!("X-ENS-{}", field.name())
            );
        }
    }

    #[test]
    fn ordered() {
        let mut res = AttributeResult::new();
        res.write(Field::PublicKeyY, "y".to_string());
        res.write(Field::Address, "a".to_string());
        assert_eq!(res.len(), 2);
        assert_eq!(res.get(Field::Address), Some("a"));
        assert_eq!(res.get(Field::Contenthash), None);
        assert_eq!(
            res.iter().collect::<Vec<_>>(),
            [(Field::PublicKeyY, "y"), (Field::Address, "a")]
        );
        assert_eq!(
            res.headers().collect::<Vec<_>>(),
            [("X-ENS-Public-Key-Y", "y"), ("X-ENS-Address", "a")]
        );
    }
}
