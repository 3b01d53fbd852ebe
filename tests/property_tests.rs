//! Property-based tests using proptest
//!
//! Placeholder numbering and value ordering of the generated SQL must hold
//! for every combination of fields and filters, not just the examples in the
//! unit tests.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

use jobboard::application::dto::{CompanyFilter, JobFilter};
use jobboard::domain::changeset::{Changeset, SqlValue};
use jobboard::domain::errors::DomainError;
use jobboard::infrastructure::persistence::{
    ColumnMap, QueryBuilder, SetClause, WhereBuilder, COMPANY_COLUMNS, JOB_COLUMNS,
};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());

const FIELDS: &[&str] = &[
    "title",
    "salary",
    "equity",
    "name",
    "description",
    "numEmployees",
    "logoUrl",
    "firstName",
];

fn placeholders(sql: &str) -> Vec<usize> {
    PLACEHOLDER
        .captures_iter(sql)
        .map(|c| c[1].parse().unwrap())
        .collect()
}

/// Strategy for a single nullable value of any supported type
fn value_strategy() -> impl Strategy<Value = SqlValue> {
    prop_oneof![
        proptest::option::of("[a-zA-Z0-9 '$]{0,20}").prop_map(SqlValue::Text),
        proptest::option::of(any::<i32>()).prop_map(SqlValue::Int),
        proptest::option::of(any::<bool>()).prop_map(SqlValue::Bool),
    ]
}

/// Strategy for a non-empty changeset over distinct field names
fn changeset_strategy() -> impl Strategy<Value = Vec<(&'static str, SqlValue)>> {
    proptest::sample::subsequence(FIELDS, 1..=FIELDS.len())
        .prop_flat_map(|fields| {
            let len = fields.len();
            (Just(fields), proptest::collection::vec(value_strategy(), len))
        })
        .prop_map(|(fields, values)| fields.into_iter().zip(values).collect())
}

fn column_map_strategy() -> impl Strategy<Value = ColumnMap> {
    prop_oneof![Just(JOB_COLUMNS), Just(COMPANY_COLUMNS)]
}

fn to_changeset(pairs: &[(&'static str, SqlValue)]) -> Changeset {
    pairs
        .iter()
        .fold(Changeset::new(), |changes, (field, value)| {
            changes.set(*field, value.clone())
        })
}

proptest! {
    #[test]
    fn set_clause_placeholders_are_contiguous(
        pairs in changeset_strategy(),
        columns in column_map_strategy(),
        start in 1usize..50,
    ) {
        let clause = SetClause::build_from(&to_changeset(&pairs), &columns, start).unwrap();

        let expected: Vec<usize> = (start..start + pairs.len()).collect();
        prop_assert_eq!(placeholders(&clause.sql), expected);
        prop_assert_eq!(clause.next_placeholder(), start + pairs.len());
    }

    #[test]
    fn set_clause_keeps_values_in_order(
        pairs in changeset_strategy(),
        columns in column_map_strategy(),
    ) {
        let clause = SetClause::build(&to_changeset(&pairs), &columns).unwrap();

        let values: Vec<SqlValue> = pairs.iter().map(|(_, v)| v.clone()).collect();
        prop_assert_eq!(clause.values, values);
    }

    #[test]
    fn set_clause_renders_mapped_and_unmapped_columns(
        pairs in changeset_strategy(),
        columns in column_map_strategy(),
    ) {
        let clause = SetClause::build(&to_changeset(&pairs), &columns).unwrap();

        let expected = pairs
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("\"{}\"=${}", columns.column(*field), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(clause.sql, expected);
    }

    #[test]
    fn where_builder_hands_out_one_placeholder_per_value(
        values in proptest::collection::vec(any::<i32>(), 0..10),
        start in 1usize..20,
    ) {
        let mut builder = WhereBuilder::starting_at(start);
        for value in &values {
            let placeholder = builder.bind(*value);
            builder.and(format!("x = {}", placeholder));
        }
        prop_assert_eq!(builder.next_placeholder(), start + values.len());

        let query = builder.finish();
        let expected: Vec<usize> = (start..start + values.len()).collect();
        prop_assert_eq!(placeholders(&query.where_clause), expected);
        prop_assert_eq!(query.parameters.len(), values.len());
        prop_assert_eq!(query.where_clause.is_empty(), values.is_empty());
    }

    #[test]
    fn job_filter_binds_every_value(
        title in proptest::option::of("[a-zA-Z$% ]{1,20}"),
        min_salary in proptest::option::of(any::<i32>()),
        has_equity in proptest::option::of(any::<bool>()),
    ) {
        let filter = JobFilter { title: title.clone(), min_salary, has_equity };
        let query = QueryBuilder::job_filter(&filter);

        let expected: Vec<usize> = (1..=query.parameters.len()).collect();
        prop_assert_eq!(placeholders(&query.where_clause), expected);

        // Title text never reaches the SQL itself
        let plain = QueryBuilder::job_filter(&JobFilter {
            title: title.as_ref().map(|_| "x".to_string()),
            min_salary,
            has_equity,
        });
        prop_assert_eq!(query.where_clause, plain.where_clause);
    }

    #[test]
    fn company_filter_binds_every_value(
        name in proptest::option::of("[a-zA-Z$% ]{1,20}"),
        min_employees in proptest::option::of(0i32..1000),
        max_employees in proptest::option::of(0i32..1000),
    ) {
        let filter = CompanyFilter { name, min_employees, max_employees };
        let query = QueryBuilder::company_filter(&filter);

        let expected_count = [
            filter.name.is_some(),
            min_employees.is_some(),
            max_employees.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        prop_assert_eq!(query.parameters.len(), expected_count);
        let expected: Vec<usize> = (1..=expected_count).collect();
        prop_assert_eq!(placeholders(&query.where_clause), expected);
    }
}

#[test]
fn empty_changeset_is_rejected_for_any_map() {
    for columns in [JOB_COLUMNS, COMPANY_COLUMNS] {
        assert!(matches!(
            SetClause::build(&Changeset::new(), &columns),
            Err(DomainError::NoData)
        ));
    }
}
