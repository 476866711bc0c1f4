//! Errors of resolver sessions.

use crate::base::NameError;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::string::String;
use std::sync::Arc;

//------------ Record --------------------------------------------------------

/// The records a session can read.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Record {
    /// The address record.
    Address,

    /// The content pointer record.
    Contenthash,

    /// The public key record.
    PublicKey,
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Record::Address => "address",
            Record::Contenthash => "content hash",
            Record::PublicKey => "public key",
        })
    }
}

//------------ Unavailable ---------------------------------------------------

/// Why a session could not be opened.
#[derive(Clone, Debug)]
pub enum Unavailable {
    /// The domain is not a valid name.
    InvalidName(NameError),

    /// The domain has no resolver.
    NoResolver,

    /// The backend failed while looking up the resolver.
    Io(Arc<io::Error>),
}

impl Display for Unavailable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::InvalidName(err) => err.fmt(f),
            Unavailable::NoResolver => f.write_str("no resolver"),
            Unavailable::Io(err) => err.fmt(f),
        }
    }
}

//------------ Error ---------------------------------------------------------

/// An error happened in a resolver session.
#[derive(Clone, Debug)]
pub enum Error {
    /// No session could be opened for a domain.
    ResolutionUnavailable {
        /// The domain as given.
        domain: String,

        /// What went wrong.
        cause: Unavailable,
    },

    /// The record does not exist.
    RecordNotSet(Record),

    /// The backend failed while reading the record.
    RecordReadError(Record, Arc<io::Error>),
}

impl Error {
    pub(super) fn unavailable(
        domain: impl Into<String>,
        cause: Unavailable,
    ) -> Self {
        Error::ResolutionUnavailable {
            domain: domain.into(),
            cause,
        }
    }

    /// Returns whether trying again may succeed.
    ///
    /// This is the case if the error was caused by a backend fault.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::ResolutionUnavailable {
                cause: Unavailable::Io(_),
                ..
            } | Error::RecordReadError(..)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResolutionUnavailable { domain, cause } => {
                write!(f, "cannot resolve '{}': {}", domain, cause)
            }
            Error::RecordNotSet(record) => {
                write!(f, "{} record not set", record)
            }
            Error::RecordReadError(record, err) => {
                write!(f, "failed to read {} record: {}", record, err)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::ResolutionUnavailable { cause, .. } => match cause {
                Unavailable::InvalidName(err) => Some(err),
                Unavailable::NoResolver => None,
                Unavailable::Io(err) => Some(err.as_ref()),
            },
            Error::RecordNotSet(_) => None,
            Error::RecordReadError(_, err) => Some(err.as_ref()),
        }
    }
}
