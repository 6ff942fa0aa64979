#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

use std::fmt;

///
/// Primitive
///
/// Closed set of primitive type tags emitted by the object generator.
/// Variant order is registry order.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Primitive {
    Bool,
    Datetime,
    Float,
    Int,
    Object,
    String,
    UnsignedInt,
}

impl Primitive {
    /// Return the full metadata descriptor for one primitive.
    #[must_use]
    pub const fn metadata(self) -> PrimitiveMetadata {
        primitive_registry!(metadata_from_registry, self)
    }

    /// Resolve a primitive from its exact wire name (`int`, `unsigned int`, ...).
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        primitive_registry!(from_wire_name_from_registry, name)
    }

    /// Return the wire name used in type tags.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        self.metadata().wire_name
    }

    /// Return the JSON value family this primitive is carried in.
    #[must_use]
    pub const fn family(self) -> JsonFamily {
        self.metadata().family
    }

    /// Return whether a JSON string may carry this primitive.
    #[must_use]
    pub const fn accepts_text_form(self) -> bool {
        self.metadata().accepts_text_form
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

///
/// PrimitiveMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimitiveMetadata {
    pub wire_name: &'static str,
    pub family: JsonFamily,
    pub accepts_text_form: bool,
}

///
/// JsonFamily
///
/// Coarse JSON routing family used by payload decoding.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JsonFamily {
    Bool,
    Number,
    Object,
    Temporal,
    Text,
}

/// Ordered list of all primitives in registry order.
pub const ALL_PRIMITIVES: [Primitive; 7] = primitive_registry!(all_primitives_from_registry);
