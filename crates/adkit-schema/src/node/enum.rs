use crate::{prelude::*, validate::naming};
use std::collections::BTreeSet;

///
/// EnumGroup
///
/// Closed set of string constants associated with a record kind.
/// Groups are independent namespaces: two groups may share a value.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct EnumGroup {
    pub ident: &'static str,
    pub variants: &'static [EnumVariant],
}

impl EnumGroup {
    /// All member values of this group.
    #[must_use]
    pub fn values(&self) -> BTreeSet<&'static str> {
        let variants = self.variants;
        variants.iter().map(|v| v.value).collect()
    }

    /// Exact-match membership test on the wire value.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.variants.iter().any(|v| v.value == value)
    }

    #[must_use]
    pub fn get_variant(&self, ident: &str) -> Option<&'static EnumVariant> {
        let variants = self.variants;
        variants.iter().find(|v| v.ident == ident)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl ValidateNode for EnumGroup {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        naming::validate_type_ident(self.ident, &mut errs);

        if self.variants.is_empty() {
            err!(errs, "enum group '{}' has no members", self.ident);
        }

        let mut idents = BTreeSet::new();
        let mut values = BTreeSet::new();
        for variant in self.variants {
            errs.add_result(variant.validate());

            if !idents.insert(variant.ident) {
                err!(errs, "duplicate member ident '{}'", variant.ident);
            }
            if !values.insert(variant.value) {
                err!(errs, "duplicate member value '{}'", variant.value);
            }
        }

        errs.result()
    }
}

///
/// EnumVariant
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct EnumVariant {
    pub ident: &'static str,
    pub value: &'static str,
}

impl ValidateNode for EnumVariant {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        naming::validate_type_ident(self.ident, &mut errs);
        naming::validate_enum_value(self.value, &mut errs);

        errs.result()
    }
}
