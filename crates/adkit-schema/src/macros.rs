//! Declarative builders for generated record kinds.
//!
//! Each macro expands to a plain Rust type plus a `const` descriptor table,
//! so the schema is fixed at compile time and read without locking.

/// Declare a closed enum group.
///
/// Expands to a Rust enum with `ALL`, `GROUP`, `as_str`, `from_value`,
/// `Display`, `FromStr` and serde support using the wire literal.
///
/// ```ignore
/// enum_group! {
///     pub enum EvaluationType {
///         Schedule => "SCHEDULE",
///         Trigger => "TRIGGER",
///     }
/// }
/// ```
#[macro_export]
macro_rules! enum_group {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Descriptor table for this group.
            pub const GROUP: $crate::node::EnumGroup = $crate::node::EnumGroup {
                ident: stringify!($name),
                variants: &[
                    $(
                        $crate::node::EnumVariant {
                            ident: stringify!($variant),
                            value: $value,
                        },
                    )+
                ],
            };

            /// Wire literal for this member.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            /// Exact-match lookup on the wire literal.
            #[must_use]
            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::node::NodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(s).ok_or_else(|| $crate::node::NodeError::UnknownEnumValue {
                    group: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl $crate::__reexports::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__reexports::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__reexports::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__reexports::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__reexports::serde::Deserialize>::deserialize(deserializer)?;

                value.parse().map_err(<D::Error as $crate::__reexports::serde::de::Error>::custom)
            }
        }
    };
}

/// Declare a record kind.
///
/// Expands to a unit marker type implementing [`RecordKind`], plus a field
/// enum whose members map to wire identifiers and type tags.
///
/// ```ignore
/// record! {
///     pub struct AdRuleSample {
///         fields: Field {
///             RuleId => "rule_id": TypeTag::INT,
///         }
///         enums: [EvaluationType]
///     }
/// }
/// ```
///
/// [`RecordKind`]: crate::node::RecordKind
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            fields: $field_enum:ident {
                $( $variant:ident => $ident:literal : $ty:expr ),+ $(,)?
            }
            enums: [ $( $group:ty ),* $(,)? ]
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis struct $name;

        impl $name {
            /// Descriptor table for this record kind. The table is a single
            /// `static`, so every reference to it has the same address.
            pub const DESCRIPTOR: &'static $crate::node::Record = {
                static RECORD: $crate::node::Record = $crate::node::Record {
                    ident: stringify!($name),
                    fields: $crate::node::FieldList {
                        fields: &[
                            $(
                                $crate::node::Field {
                                    ident: $ident,
                                    ty: $ty,
                                },
                            )+
                        ],
                    },
                    enum_groups: &[ $( <$group>::GROUP, )* ],
                };

                &RECORD
            };
        }

        impl $crate::node::RecordKind for $name {
            const RECORD: &'static $crate::node::Record = Self::DESCRIPTOR;
        }

        #[doc = concat!("Field identifiers of [`", stringify!($name), "`].")]
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis enum $field_enum {
            $( $variant, )+
        }

        impl $field_enum {
            /// Every field in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Wire identifier for this field.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $ident, )+
                }
            }

            /// Declared type tag for this field.
            #[must_use]
            pub const fn type_tag(self) -> $crate::types::TypeTag {
                match self {
                    $( Self::$variant => $ty, )+
                }
            }

            /// Exact-match lookup on the wire identifier.
            #[must_use]
            pub fn from_ident(ident: &str) -> Option<Self> {
                match ident {
                    $( $ident => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $field_enum {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $field_enum {
            type Err = $crate::node::NodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_ident(s).ok_or_else(|| $crate::node::NodeError::UnknownField {
                    record: stringify!($name),
                    field: s.to_string(),
                })
            }
        }
    };
}
