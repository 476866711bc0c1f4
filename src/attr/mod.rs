//! Resolving the attributes of a domain.
//!
//! An attribute is a piece of information about a domain that can be
//! requested by name. Resolving an attribute reads one record through a
//! [`Session`] and renders it into one or more output [`Field`]s:
//!
//! | attribute          | fields                                        |
//! |--------------------|-----------------------------------------------|
//! | `address`          | `Address`                                     |
//! | `contenthash`      | `Contenthash`, `Contenthash-Codec`, `Contenthash-Address` |
//! | `public_key`       | `Public-Key-X`, `Public-Key-Y`                |
//! | `resolver_address` | `Resolver-Address`                            |
//!
//! Attributes are resolved strictly in the order requested. The first
//! unknown attribute name or failed lookup ends the process with an
//! [`Error`]. Fields written before that stay where they were written:
//! [`resolve_into`] leaves them in the caller’s [`Sink`] while [`resolve`]
//! drops them along with its result.

use crate::base::PublicKey;
use crate::error::Error;
use crate::multicodec;
use crate::resolv::{Backend, Session};
use crate::utils::base16;
use std::string::{String, ToString};
use tracing::{debug, trace};

pub use self::output::{AttributeResult, Field, Sink};

pub mod output;

//------------ Attribute -----------------------------------------------------

/// An attribute of a domain.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Attribute {
    /// The address record.
    Address,

    /// The decoded content pointer.
    Contenthash,

    /// The public key.
    PublicKey,

    /// The address of the domain’s resolver.
    ResolverAddress,
}

/// The known attributes by name.
///
/// Names are lower case. Anything not in here is an unknown attribute.
pub const ATTRIBUTES: &[(&str, Attribute)] = &[
    ("address", Attribute::Address),
    ("contenthash", Attribute::Contenthash),
    ("public_key", Attribute::PublicKey),
    ("resolver_address", Attribute::ResolverAddress),
];

impl Attribute {
    /// Returns the attribute for a name.
    ///
    /// The name is compared ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        ATTRIBUTES
            .iter()
            .find(|(item, _)| *item == name)
            .map(|(_, attr)| *attr)
    }

    /// Returns the name of the attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Address => "address",
            Attribute::Contenthash => "contenthash",
            Attribute::PublicKey => "public_key",
            Attribute::ResolverAddress => "resolver_address",
        }
    }

    /// Returns the fields produced by the attribute.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Attribute::Address => &[Field::Address],
            Attribute::Contenthash => &[
                Field::Contenthash,
                Field::ContenthashCodec,
                Field::ContenthashAddress,
            ],
            Attribute::PublicKey => &[Field::PublicKeyX, Field::PublicKeyY],
            Attribute::ResolverAddress => &[Field::ResolverAddress],
        }
    }

    /// Resolves the attribute and writes its fields to `sink`.
    ///
    /// Nothing is written if resolution fails.
    pub async fn resolve<B, S>(
        self,
        session: &Session<'_, B>,
        sink: &mut S,
    ) -> Result<(), Error>
    where
        B: Backend + ?Sized,
        S: Sink + ?Sized,
    {
        match self {
            Attribute::Address => {
                let addr = session.address().await?;
                sink.write(Field::Address, addr.to_string());
            }
            Attribute::Contenthash => {
                let octets = session.content_pointer().await?;
                let decoded = multicodec::decode(&octets)?;
                debug!(
                    domain = %session.name(),
                    codec = decoded.codec_name(),
                    address = decoded.address(),
                    "content hash decoded"
                );
                sink.write(Field::Contenthash, base16::encode_string(&octets));
                sink.write(
                    Field::ContenthashCodec,
                    decoded.codec_name().to_string(),
                );
                sink.write(Field::ContenthashAddress, decoded.into_address());
            }
            Attribute::PublicKey => {
                let key: PublicKey = session.public_key().await?;
                sink.write(Field::PublicKeyX, base16::encode_string(key.x()));
                sink.write(Field::PublicKeyY, base16::encode_string(key.y()));
            }
            Attribute::ResolverAddress => {
                sink.write(
                    Field::ResolverAddress,
                    session.resolver_address().to_string(),
                );
            }
        }
        Ok(())
    }
}

//------------ resolve_into --------------------------------------------------

/// Resolves attributes of a domain into a sink.
///
/// Opens a session for `domain` and then resolves the attributes named in
/// `attributes` one after another, writing their fields to `sink`.
///
/// The first failure ends resolution. Fields of attributes resolved
/// before remain in `sink`.
pub async fn resolve_into<B, I, S>(
    backend: &B,
    domain: &str,
    attributes: I,
    sink: &mut S,
) -> Result<(), Error>
where
    B: Backend + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: Sink + ?Sized,
{
    let session = Session::open(backend, domain).await?;
    for name in attributes {
        let name = name.as_ref();
        let attr = Attribute::from_name(name).ok_or_else(|| {
            debug!(domain, attribute = name, "unknown attribute");
            Error::UnknownAttribute(String::from(name))
        })?;
        trace!(domain, attribute = attr.name(), "resolving attribute");
        attr.resolve(&session, &mut *sink).await?;
    }
    Ok(())
}

//------------ resolve -------------------------------------------------------

/// Resolves attributes of a domain.
///
/// This is like [`resolve_into`] but collects the fields in a new
/// [`AttributeResult`]. On failure, the fields resolved so far are
/// dropped.
pub async fn resolve<B, I>(
    backend: &B,
    domain: &str,
    attributes: I,
) -> Result<AttributeResult, Error>
where
    B: Backend + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut res = AttributeResult::new();
    resolve_into(backend, domain, attributes, &mut res).await?;
    Ok(res)
}

//------------ resolve_blocking ----------------------------------------------

/// Resolves attributes of a domain synchronously.
///
/// Runs [`resolve`] on a new single-threaded runtime. This must not be
/// called from within an async runtime.
#[cfg(feature = "resolv-sync")]
pub fn resolve_blocking<B, I>(
    backend: &B,
    domain: &str,
    attributes: I,
) -> Result<AttributeResult, Error>
where
    B: Backend + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| {
            Error::Resolv(crate::resolv::Error::ResolutionUnavailable {
                domain: domain.into(),
                cause: crate::resolv::Unavailable::Io(std::sync::Arc::new(
                    err,
                )),
            })
        })?;
    runtime.block_on(resolve(backend, domain, attributes))
}

//============ Test ==========================================================
