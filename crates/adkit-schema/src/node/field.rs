use crate::{prelude::*, validate::naming};
use derive_more::{Deref, IntoIterator};

///
/// FieldList
///
/// Ordered field table of one record kind. Declaration order is kept for
/// iteration and export; lookup is exact-match on the identifier.
///

#[derive(Clone, Copy, Debug, Deref, IntoIterator, Serialize)]
#[serde(transparent)]
pub struct FieldList {
    pub fields: &'static [Field],
}

impl FieldList {
    #[must_use]
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&'static Field> {
        let fields = self.fields;
        fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn idents(&self) -> impl Iterator<Item = &'static str> + use<> {
        let fields = self.fields;
        fields.iter().map(|f| f.ident)
    }
}

impl ValidateNode for FieldList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for field in self.fields {
            errs.add_for(field.ident, field.validate().err().unwrap_or_default());
        }

        errs.result()
    }
}

///
/// Field
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub ident: &'static str,
    pub ty: TypeTag,
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        naming::validate_field_ident(self.ident, &mut errs);
        naming::validate_type_tag(&self.ty, &mut errs);

        errs.result()
    }
}
