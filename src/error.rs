//! The error type of attribute resolution.
//!
//! Every failure ends the resolution of the remaining attributes. The
//! [`Error`] returned says which of a small set of kinds of failure
//! happened. The kind alone is meant to be enough for an application to
//! decide on its response, such as which status code to return or whether
//! to try again.

use crate::base::varint::VarintError;
use crate::cid::CidError;
use crate::multicodec::{self, Codec};
use crate::resolv;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::string::String;

//------------ ErrorKind -----------------------------------------------------

/// The kind of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// No lookup session could be established for the domain.
    ResolutionUnavailable,

    /// A requested record does not exist.
    RecordNotSet,

    /// The backend failed while reading a record.
    RecordReadError,

    /// The content pointer lacks a valid codec.
    MalformedContentPointer,

    /// The content pointer’s codec is not registered.
    UnknownCodec,

    /// The content pointer’s content identifier is malformed.
    InvalidContentIdentifier,

    /// An attribute name is not known.
    UnknownAttribute,
}

//------------ Error ---------------------------------------------------------

/// Resolving attributes failed.
#[derive(Clone, Debug)]
pub enum Error {
    /// The resolver session failed.
    ///
    /// This covers the domain not being resolvable as well as records
    /// missing or failing to be read.
    Resolv(resolv::Error),

    /// The content pointer lacks a valid codec.
    MalformedContentPointer(VarintError),

    /// The content pointer’s codec is not registered.
    UnknownCodec(Codec),

    /// The content pointer’s content identifier is malformed.
    InvalidContentIdentifier(CidError),

    /// An attribute name is not known.
    ///
    /// Contains the name as requested.
    UnknownAttribute(String),
}

impl Error {
    /// Returns the kind of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Resolv(resolv::Error::ResolutionUnavailable { .. }) => {
                ErrorKind::ResolutionUnavailable
            }
            Error::Resolv(resolv::Error::RecordNotSet(_)) => {
                ErrorKind::RecordNotSet
            }
            Error::Resolv(resolv::Error::RecordReadError(..)) => {
                ErrorKind::RecordReadError
            }
            Error::MalformedContentPointer(_) => {
                ErrorKind::MalformedContentPointer
            }
            Error::UnknownCodec(_) => ErrorKind::UnknownCodec,
            Error::InvalidContentIdentifier(_) => {
                ErrorKind::InvalidContentIdentifier
            }
            Error::UnknownAttribute(_) => ErrorKind::UnknownAttribute,
        }
    }

    /// Returns whether trying again may succeed.
    ///
    /// This is the case for failures caused by the backend only. All other
    /// failures will happen again for the same data.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Resolv(err) => err.is_retryable(),
            _ => false,
        }
    }
}

//--- From

impl From<resolv::Error> for Error {
    fn from(err: resolv::Error) -> Self {
        Error::Resolv(err)
    }
}

impl From<multicodec::DecodeError> for Error {
    fn from(err: multicodec::DecodeError) -> Self {
        match err {
            multicodec::DecodeError::Malformed(err) => {
                Error::MalformedContentPointer(err)
            }
            multicodec::DecodeError::UnknownCodec(codec) => {
                Error::UnknownCodec(codec)
            }
            multicodec::DecodeError::InvalidContentId(err) => {
                Error::InvalidContentIdentifier(err)
            }
        }
    }
}

//--- Display and Error

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Resolv(err) => err.fmt(f),
            Error::MalformedContentPointer(err) => {
                write!(f, "malformed content hash: {}", err)
            }
            Error::UnknownCodec(codec) => {
                write!(f, "unknown content hash codec {}", codec)
            }
            Error::InvalidContentIdentifier(err) => {
                write!(f, "invalid content hash: {}", err)
            }
            Error::UnknownAttribute(name) => {
                write!(f, "unrecognized ENS attribute '{}'", name)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Resolv(err) => err.source(),
            Error::MalformedContentPointer(err) => Some(err),
            Error::UnknownCodec(_) => None,
            Error::InvalidContentIdentifier(err) => Some(err),
            Error::UnknownAttribute(_) => None,
        }
    }
}

//============ Test ==========================================================
