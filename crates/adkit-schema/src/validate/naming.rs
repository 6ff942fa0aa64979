use crate::{
    MAX_ENUM_VALUE_LEN, MAX_FIELD_NAME_LEN, MAX_RECORD_NAME_LEN, err, error::ErrorTree,
    types::{TypeTag, is_record_name},
};

pub fn validate_record_ident(ident: &str, errs: &mut ErrorTree) {
    validate_type_ident(ident, errs);

    if ident.len() > MAX_RECORD_NAME_LEN {
        err!(
            errs,
            "record ident '{ident}' exceeds max length {MAX_RECORD_NAME_LEN}"
        );
    }
}

/// Record, enum group and member idents are UpperCamelCase.
pub fn validate_type_ident(ident: &str, errs: &mut ErrorTree) {
    if !is_record_name(ident) {
        err!(errs, "ident '{ident}' must be UpperCamelCase");
    }
}

/// Field idents are the wire keys: lowercase snake_case.
pub fn validate_field_ident(ident: &str, errs: &mut ErrorTree) {
    if !is_snake_case(ident) {
        err!(errs, "field ident '{ident}' must be snake_case");
    }

    if ident.len() > MAX_FIELD_NAME_LEN {
        err!(
            errs,
            "field ident '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}"
        );
    }
}

/// Enum members are carried on the wire as UPPER_SNAKE_CASE literals.
pub fn validate_enum_value(value: &str, errs: &mut ErrorTree) {
    if !is_upper_snake_case(value) {
        err!(errs, "enum value '{value}' must be UPPER_SNAKE_CASE");
    }

    if value.len() > MAX_ENUM_VALUE_LEN {
        err!(
            errs,
            "enum value '{value}' exceeds max length {MAX_ENUM_VALUE_LEN}"
        );
    }
}

/// Record references inside a tag must be spelled like record kinds.
pub fn validate_type_tag(tag: &TypeTag, errs: &mut ErrorTree) {
    if let Some(name) = tag.referenced_record()
        && !is_record_name(name)
    {
        err!(errs, "type tag '{tag}' references invalid record kind '{name}'");
    }
}

#[must_use]
pub fn is_snake_case(s: &str) -> bool {
    is_delimited(s, |c| c.is_ascii_lowercase())
}

#[must_use]
pub fn is_upper_snake_case(s: &str) -> bool {
    is_delimited(s, |c| c.is_ascii_uppercase())
}

// letters of one case, digits and single underscores; starts with a letter
fn is_delimited(s: &str, is_letter: impl Fn(char) -> bool) -> bool {
    let mut prev_underscore = false;

    for (idx, c) in s.chars().enumerate() {
        let ok = match c {
            '_' => idx > 0 && !prev_underscore,
            c if c.is_ascii_digit() => idx > 0,
            c => is_letter(c),
        };
        if !ok {
            return false;
        }
        prev_underscore = c == '_';
    }

    !s.is_empty() && !prev_underscore
}
