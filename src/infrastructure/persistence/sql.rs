//! Partial-update `SET` clause generation and typed parameter binding.
//!
//! Column names are only ever taken from `&'static str` tables; every value
//! travels as a bound parameter.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

use crate::domain::changeset::{Changeset, SqlValue};
use crate::domain::errors::DomainError;

/// Static translation from API field names to column names.
/// Fields without an entry are used as column names unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap(&'static [(&'static str, &'static str)]);

impl ColumnMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self(entries)
    }

    pub fn column(&self, field: &'static str) -> &'static str {
        self.0
            .iter()
            .find(|(from, _)| *from == field)
            .map(|(_, to)| *to)
            .unwrap_or(field)
    }
}

/// Job fields already match their columns
pub const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[]);

pub const COMPANY_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

/// Rendered `SET` fragment: `"col"=$n, ...` plus the values in bind order
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub sql: String,
    pub values: Vec<SqlValue>,
    start: usize,
}

impl SetClause {
    /// Build the clause with placeholders starting at `$1`
    pub fn build(changes: &Changeset, columns: &ColumnMap) -> Result<Self, DomainError> {
        Self::build_from(changes, columns, 1)
    }

    /// Build the clause with placeholders starting at `$start`
    pub fn build_from(
        changes: &Changeset,
        columns: &ColumnMap,
        start: usize,
    ) -> Result<Self, DomainError> {
        if changes.is_empty() {
            return Err(DomainError::NoData);
        }

        let mut assignments = Vec::with_capacity(changes.len());
        let mut values = Vec::with_capacity(changes.len());
        for (offset, (field, value)) in changes.fields().iter().enumerate() {
            assignments.push(format!("\"{}\"=${}", columns.column(*field), start + offset));
            values.push(value.clone());
        }

        Ok(Self {
            sql: assignments.join(", "),
            values,
            start,
        })
    }

    /// Index of the first placeholder after this clause
    pub fn next_placeholder(&self) -> usize {
        self.start + self.values.len()
    }
}

/// Bind one typed value; nulls keep their SQL type
pub(crate) fn bind_value<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    value: &SqlValue,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    match value {
        SqlValue::Text(v) => query.bind(v.clone()),
        SqlValue::Int(v) => query.bind(*v),
        SqlValue::Decimal(v) => query.bind(*v),
        SqlValue::Bool(v) => query.bind(*v),
    }
}

pub(crate) fn bind_all<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    values: &[SqlValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    values.iter().fold(query, bind_value)
}
