use crate::{prelude::*, validate::naming};
use std::collections::{BTreeMap, BTreeSet};

///
/// Record
///
/// Descriptor for one record kind: its fields, each with exactly one type
/// tag, and the enum groups documented alongside it.
///
/// Enum groups are discovery metadata only. No field's type tag is bound to
/// a group, so decoders must not infer one.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Record {
    pub ident: &'static str,
    pub fields: FieldList,

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub enum_groups: &'static [EnumGroup],
}

impl Record {
    /// All declared field identifiers.
    #[must_use]
    pub fn field_names(&self) -> BTreeSet<&'static str> {
        self.fields.idents().collect()
    }

    /// Declared type of `field`. Lookup is exact; there is no case folding
    /// and no alias table.
    pub fn type_of(&self, field: &str) -> Result<&'static TypeTag, NodeError> {
        self.get_field(field)
            .map(|f| &f.ty)
            .ok_or_else(|| self.unknown_field(field))
    }

    #[must_use]
    pub fn get_field(&self, field: &str) -> Option<&'static Field> {
        self.fields.get(field)
    }

    /// Resolve a field, failing with `UnknownField`.
    pub fn try_get_field(&self, field: &str) -> Result<&'static Field, NodeError> {
        self.get_field(field).ok_or_else(|| self.unknown_field(field))
    }

    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.get_field(field).is_some()
    }

    /// Every enum group documented on this record, keyed by group ident.
    #[must_use]
    pub fn enum_groups(&self) -> BTreeMap<&'static str, &'static EnumGroup> {
        let groups = self.enum_groups;
        groups.iter().map(|g| (g.ident, g)).collect()
    }

    pub fn enum_group(&self, group: &str) -> Result<&'static EnumGroup, NodeError> {
        let groups = self.enum_groups;

        groups
            .iter()
            .find(|g| g.ident == group)
            .ok_or_else(|| NodeError::UnknownEnumGroup {
                record: self.ident,
                group: group.to_string(),
            })
    }

    /// Record kinds referenced by field type tags, looking through lists.
    #[must_use]
    pub fn referenced_records(&self) -> BTreeSet<&'static str> {
        self.fields
            .iter()
            .filter_map(|f| f.ty.referenced_record())
            .collect()
    }

    fn unknown_field(&self, field: &str) -> NodeError {
        NodeError::UnknownField {
            record: self.ident,
            field: field.to_string(),
        }
    }
}

impl ValidateNode for Record {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        naming::validate_record_ident(self.ident, &mut errs);

        if self.fields.is_empty() {
            err!(errs, "record '{}' declares no fields", self.ident);
        }

        let mut seen = BTreeSet::new();
        for field in self.fields {
            if !seen.insert(field.ident) {
                err!(errs, "duplicate field '{}'", field.ident);
            }
        }
        errs.add_for("fields", self.fields.validate().err().unwrap_or_default());

        let mut groups = BTreeSet::new();
        for group in self.enum_groups {
            if !groups.insert(group.ident) {
                err!(errs, "duplicate enum group '{}'", group.ident);
            }
            errs.add_for(group.ident, group.validate().err().unwrap_or_default());
        }

        errs.result()
    }
}
