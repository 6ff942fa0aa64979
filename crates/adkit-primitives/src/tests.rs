use crate::{ALL_PRIMITIVES, JsonFamily, Primitive};
use std::collections::BTreeSet;

#[test]
fn wire_names_resolve_back_to_their_primitive() {
    for primitive in ALL_PRIMITIVES {
        assert_eq!(
            Primitive::from_wire_name(primitive.wire_name()),
            Some(primitive),
            "{primitive:?} should resolve from its wire name"
        );
    }
}

#[test]
fn wire_names_are_unique() {
    let names: BTreeSet<_> = ALL_PRIMITIVES.iter().map(|p| p.wire_name()).collect();

    assert_eq!(names.len(), ALL_PRIMITIVES.len());
}

#[test]
fn wire_name_lookup_is_exact() {
    assert_eq!(Primitive::from_wire_name("int"), Some(Primitive::Int));
    assert_eq!(Primitive::from_wire_name("Int"), None);
    assert_eq!(Primitive::from_wire_name("object"), None);
    assert_eq!(Primitive::from_wire_name("Object"), Some(Primitive::Object));
    assert_eq!(
        Primitive::from_wire_name("unsigned int"),
        Some(Primitive::UnsignedInt)
    );
    assert_eq!(Primitive::from_wire_name(""), None);
}

#[test]
fn registry_order_is_sorted() {
    let mut sorted = ALL_PRIMITIVES;
    sorted.sort();

    assert_eq!(sorted, ALL_PRIMITIVES);
}

#[test]
fn number_family_primitives_accept_text() {
    for primitive in ALL_PRIMITIVES {
        if primitive.family() == JsonFamily::Number {
            assert!(primitive.accepts_text_form(), "{primitive}");
        }
    }

    assert!(!Primitive::Bool.accepts_text_form());
    assert_eq!(Primitive::Datetime.family(), JsonFamily::Temporal);
}

#[test]
fn display_matches_wire_name() {
    assert_eq!(Primitive::Datetime.to_string(), "datetime");
    assert_eq!(Primitive::UnsignedInt.to_string(), "unsigned int");
}
