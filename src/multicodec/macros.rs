//! Macros making implementing registry types easier.

/// Creates a registry type wrapping a varint-encoded integer.
///
/// This adds impls for `From`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`,
/// `Hash`, `Debug`, and `Display`, as well as conversions between values
/// and their registered names and between values and their wire format.
///
/// `Display` writes the registered name if there is one or the integer
/// value in hex otherwise.
macro_rules! varint_enum {
    ( $(#[$attr:meta])* =>
      $regtype:ident;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $name:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $regtype(u64);

        impl $regtype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $regtype = $regtype($value);
            )*
        }

        impl $regtype {
            /// All registered values in registry order.
            pub const ALL: &'static [$regtype] = &[
                $( $regtype::$variant, )*
            ];

            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> u64 {
                self.0
            }

            /// Returns a value from its registered name.
            ///
            /// Names are compared ignoring ASCII case.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($name) {
                        return Some($regtype::$variant)
                    }
                )*
                None
            }

            /// Returns the registered name for this value if there is one.
            #[must_use]
            pub const fn to_name(self) -> Option<&'static str> {
                match self {
                    $(
                        $regtype::$variant => Some($name),
                    )*
                    _ => None
                }
            }

            /// Returns whether the value has a registered name.
            #[must_use]
            pub const fn is_registered(self) -> bool {
                self.to_name().is_some()
            }

            /// Takes a value from the beginning of a parser.
            pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
                parser: &mut octseq::parse::Parser<'_, Octs>
            ) -> Result<Self, $crate::base::varint::VarintError> {
                $crate::base::varint::parse(parser).map(Self::from_int)
            }

            /// Appends the wire format of the value to `target`.
            pub fn compose<Target: octseq::builder::OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target
            ) -> Result<(), Target::AppendError> {
                $crate::base::varint::compose(self.to_int(), target)
            }

            /// Returns the length of the wire format of the value.
            #[must_use]
            pub fn compose_len(&self) -> usize {
                $crate::base::varint::compose_len(self.to_int())
            }
        }

        //--- From

        impl From<u64> for $regtype {
            fn from(value: u64) -> Self {
                $regtype::from_int(value)
            }
        }

        impl From<$regtype> for u64 {
            fn from(value: $regtype) -> Self {
                value.to_int()
            }
        }

        //--- Display and Debug

        impl core::fmt::Display for $regtype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "0x{:x}", self.0),
                }
            }
        }

        impl core::fmt::Debug for $regtype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_name() {
                    Some(name) => {
                        write!(
                            f,
                            concat!(stringify!($regtype), "::{}"),
                            name
                        )
                    }
                    None => {
                        f.debug_tuple(stringify!($regtype))
                            .field(&self.0)
                            .finish()
                    }
                }
            }
        }
    }
}
