#[macro_export]
macro_rules! primitive_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Bool,
                "bool",
                Bool,
                accepts_text_form = false
            ),
            (
                Datetime,
                "datetime",
                Temporal,
                accepts_text_form = true
            ),
            (
                Float,
                "float",
                Number,
                accepts_text_form = true
            ),
            (
                Int,
                "int",
                Number,
                accepts_text_form = true
            ),
            (
                Object,
                "Object",
                Object,
                accepts_text_form = false
            ),
            (
                String,
                "string",
                Text,
                accepts_text_form = true
            ),
            (
                UnsignedInt,
                "unsigned int",
                Number,
                accepts_text_form = true
            ),
        }
    };
}

#[macro_export]
macro_rules! primitive_registry {
    ($macro:ident) => {
        $crate::primitive_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::primitive_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($primitive:ident, $wire:literal, $family:ident, accepts_text_form = $accepts_text_form:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::Primitive::$primitive => $crate::PrimitiveMetadata {
                    wire_name: $wire,
                    family: $crate::JsonFamily::$family,
                    accepts_text_form: $accepts_text_form,
                },
            )*
        }
    };
}

macro_rules! from_wire_name_from_registry {
    ( @args $name:expr; @entries $( ($primitive:ident, $wire:literal, $family:ident, accepts_text_form = $accepts_text_form:expr) ),* $(,)? ) => {
        match $name {
            $( $wire => Some($crate::Primitive::$primitive), )*
            _ => None,
        }
    };
}

macro_rules! all_primitives_from_registry {
    ( @entries $( ($primitive:ident, $wire:literal, $family:ident, accepts_text_form = $accepts_text_form:expr) ),* $(,)? ) => {
        [ $( $crate::Primitive::$primitive ),* ]
    };
}
