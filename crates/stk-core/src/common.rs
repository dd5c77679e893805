//! Helpers shared by the decoders.

/// Declares a closed single-byte code table: the enum, its wire value, its
/// canonical name and a total reverse lookup.
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            $($variant:ident = $value:literal => $name:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        $vis enum $ty {
            $($variant,)+
        }

        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant,)+];

            /// Wire value.
            pub const fn value(self) -> u8 {
                match self {
                    $($ty::$variant => $value,)+
                }
            }

            /// Canonical upper-case name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }

            pub const fn from_value(value: u8) -> Option<Self> {
                match value {
                    $($value => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use byte_enum;

pub(crate) fn hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
