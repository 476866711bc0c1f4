//! Handler configuration.
//!
//! An application serving attributes typically resolves the same set of
//! attributes for a fixed domain over and over again. [`HandlerConf`]
//! holds this set together with the endpoint of the backend to use.
//!
//! With the `serde` feature enabled, the configuration can be read from
//! data such as the JSON object
//!
//! ```json
//! {
//!     "eth_rpc_endpoint": "https://rpc.example.net",
//!     "domain": "vitalik.eth",
//!     "attributes": ["address", "contenthash"]
//! }
//! ```

use crate::attr::{self, Attribute, AttributeResult};
use crate::base::{Name, NameError};
use crate::error::Error;
use crate::resolv::Backend;
use std::fmt;
use std::string::String;
use std::vec::Vec;

//------------ HandlerConf ---------------------------------------------------

/// The configuration of a request handler.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct HandlerConf {
    /// The endpoint of the backend.
    ///
    /// This is only used by the application to create its backend.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "eth_rpc_endpoint",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub endpoint: Option<String>,

    /// The domain to resolve.
    pub domain: String,

    /// The names of the attributes to resolve, in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
}

impl HandlerConf {
    /// Creates a configuration for a domain and a list of attributes.
    pub fn new<I>(domain: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        HandlerConf {
            endpoint: None,
            domain: domain.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks the configuration.
    ///
    /// Checks that the domain is a valid name and that all attributes are
    /// known. Resolving checks all this again, so this is only useful for
    /// reporting errors early.
    pub fn validate(&self) -> Result<(), ConfError> {
        Name::new(self.domain.as_str()).map_err(ConfError::InvalidDomain)?;
        for name in &self.attributes {
            if Attribute::from_name(name).is_none() {
                return Err(ConfError::UnknownAttribute(name.clone()));
            }
        }
        Ok(())
    }

    /// Resolves the configured attributes of the configured domain.
    pub async fn resolve<B: Backend + ?Sized>(
        &self,
        backend: &B,
    ) -> Result<AttributeResult, Error> {
        attr::resolve(backend, &self.domain, &self.attributes).await
    }
}

//------------ ConfError -----------------------------------------------------

/// A configuration is invalid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfError {
    /// The domain is not a valid name.
    InvalidDomain(NameError),

    /// An attribute is not known.
    UnknownAttribute(String),
}

//--- Display and Error

impl fmt::Display for ConfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfError::InvalidDomain(err) => {
                write!(f, "invalid domain: {}", err)
            }
            ConfError::UnknownAttribute(name) => {
                write!(f, "unrecognized ENS attribute '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfError::InvalidDomain(err) => Some(err),
            ConfError::UnknownAttribute(_) => None,
        }
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate() {
        assert_eq!(
            HandlerConf::new("vitalik.eth", ["Address", "public_key"])
                .validate(),
            Ok(())
        );
        assert_eq!(
            HandlerConf::new("", ["address"]).validate(),
            Err(ConfError::InvalidDomain(NameError::Empty))
        );
        assert_eq!(
            HandlerConf::new("vitalik.eth", ["address", "avatar", "bogus"])
                .validate(),
            Err(ConfError::UnknownAttribute("avatar".into()))
        );
    }
}
