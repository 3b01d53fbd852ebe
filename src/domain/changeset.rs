//! Ordered field assignments for partial updates
//!
//! A [`Changeset`] is the typed replacement for an arbitrary update payload:
//! field names are `'static` identifiers chosen by the code that builds the
//! changeset, never by the client, and every value is a [`SqlValue`] that is
//! bound as a query parameter.

use rust_decimal::Decimal;

/// A scalar that travels to the database as a bound parameter.
///
/// Each variant is nullable so that a `NULL` keeps the SQL type of the
/// column it is assigned to.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Int(Option<i32>),
    Decimal(Option<Decimal>),
    Bool(Option<bool>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        match self {
            SqlValue::Text(v) => v.is_none(),
            SqlValue::Int(v) => v.is_none(),
            SqlValue::Decimal(v) => v.is_none(),
            SqlValue::Bool(v) => v.is_none(),
        }
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(Some(value))
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        SqlValue::Int(value)
    }
}

impl From<Decimal> for SqlValue {
    fn from(value: Decimal) -> Self {
        SqlValue::Decimal(Some(value))
    }
}

impl From<Option<Decimal>> for SqlValue {
    fn from(value: Option<Decimal>) -> Self {
        SqlValue::Decimal(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(Some(value))
    }
}

impl From<Option<bool>> for SqlValue {
    fn from(value: Option<bool>) -> Self {
        SqlValue::Bool(value)
    }
}

/// Ordered list of `(field, value)` assignments.
///
/// Order of the first assignment to each field is preserved; assigning the
/// same field twice replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changeset {
    fields: Vec<(&'static str, SqlValue)>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style assignment
    pub fn set(mut self, field: &'static str, value: impl Into<SqlValue>) -> Self {
        self.push(field, value);
        self
    }

    pub fn push(&mut self, field: &'static str, value: impl Into<SqlValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[(&'static str, SqlValue)] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn get(&self, field: &str) -> Option<&SqlValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }
}
