mod postgres_company_repository;
mod postgres_job_repository;
mod query_builder;
mod sql;

pub use postgres_company_repository::PostgresCompanyRepository;
pub use postgres_job_repository::PostgresJobRepository;
pub use query_builder::{FilterQuery, QueryBuilder, WhereBuilder};
pub use sql::{ColumnMap, SetClause, COMPANY_COLUMNS, JOB_COLUMNS};
