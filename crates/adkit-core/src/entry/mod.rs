#[cfg(test)]
mod tests;

use crate::{
    error::{ErrorOrigin, InternalError},
    traits::{ApiContext, FieldValues},
    value::Value,
};
use adkit_schema::node::{Field, Record, RecordKind};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value as JsonValue};
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// Entry
///
/// One record instance: values for a subset of its kind's declared fields,
/// plus an optional handle to the API client that produced it.
///
/// Every key is a declared field and every value conforms to that field's
/// type tag; `set` is the only way in and enforces both.
///

#[derive(Clone)]
pub struct Entry {
    record: &'static Record,
    values: BTreeMap<&'static str, Value>,
    api: Option<Arc<dyn ApiContext>>,
}

impl Entry {
    #[must_use]
    pub fn new(record: &'static Record) -> Self {
        Self {
            record,
            values: BTreeMap::new(),
            api: None,
        }
    }

    /// Empty entry for a generated record kind.
    #[must_use]
    pub fn of<R: RecordKind>() -> Self {
        Self::new(R::RECORD)
    }

    #[must_use]
    pub fn with_api(mut self, api: Arc<dyn ApiContext>) -> Self {
        self.api = Some(api);
        self
    }

    pub fn set_api(&mut self, api: Option<Arc<dyn ApiContext>>) {
        self.api = api;
    }

    #[must_use]
    pub fn api(&self) -> Option<&Arc<dyn ApiContext>> {
        self.api.as_ref()
    }

    #[must_use]
    pub const fn record(&self) -> &'static Record {
        self.record
    }

    /// Record kind ident.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.record.ident
    }

    /// Value of a declared field; `Ok(None)` when the field is declared but
    /// absent, an unknown-field error when it is not declared at all.
    pub fn get(&self, field: &str) -> Result<Option<&Value>, InternalError> {
        let field = self.resolve(field)?;

        Ok(self.values.get(field.ident))
    }

    /// Store a value, returning the previous one.
    pub fn set(
        &mut self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, InternalError> {
        let field = self.resolve(field)?;
        let value = value.into();

        if !value.conforms_to(&field.ty) {
            return Err(InternalError::entry_type_mismatch(format!(
                "field '{}' on record '{}' expects {}, got {}",
                field.ident,
                self.kind(),
                field.ty,
                value.label()
            )));
        }

        Ok(self.values.insert(field.ident, value))
    }

    pub fn remove(&mut self, field: &str) -> Result<Option<Value>, InternalError> {
        let field = self.resolve(field)?;

        Ok(self.values.remove(field.ident))
    }

    /// True when the field is present; an undeclared field is an error.
    pub fn contains(&self, field: &str) -> Result<bool, InternalError> {
        let field = self.resolve(field)?;

        Ok(self.values.contains_key(field.ident))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Field, &Value)> {
        self.record
            .fields
            .into_iter()
            .filter_map(|f| self.values.get(f.ident).map(|v| (f, v)))
    }

    /// Identifiers of present fields in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|(f, _)| f.ident)
    }

    /// Re-serialize every present field by identifier.
    #[must_use]
    pub fn export_all_data(&self) -> Map<String, JsonValue> {
        self.iter()
            .map(|(f, v)| (f.ident.to_string(), v.to_json()))
            .collect()
    }

    fn resolve(&self, field: &str) -> Result<&'static Field, InternalError> {
        self.record
            .try_get_field(field)
            .map_err(|err| InternalError::node(ErrorOrigin::Entry, err))
    }
}

impl FieldValues for Entry {
    fn get_value(&self, field: &str) -> Result<Option<Value>, InternalError> {
        self.get(field).map(|value| value.cloned())
    }
}

// The API handle is transport state, not data.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.record.ident == other.record.ident && self.values == other.values
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind())
            .field("values", &self.values)
            .field("api", &self.api)
            .finish()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.ident, value)?;
        }

        map.end()
    }
}
