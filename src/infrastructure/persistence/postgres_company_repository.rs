use async_trait::async_trait;
use sqlx::PgPool;

use super::query_builder::QueryBuilder;
use super::sql::{bind_all, SetClause, COMPANY_COLUMNS};
use crate::application::dto::CompanyFilter;
use crate::application::ports::{CompanyRepository, RepositoryError};
use crate::domain::changeset::Changeset;
use crate::domain::entities::Company;
use crate::domain::value_objects::CompanyHandle;

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_or_database(err: sqlx::Error, handle: &CompanyHandle) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicate(handle.to_string())
        }
        _ => RepositoryError::Database(err),
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: &Company) -> Result<Company, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO companies (handle, name, description, num_employees, logo_url)
            VALUES ($1, $2, $3, $4, $5)
            {}
            "#,
            QueryBuilder::COMPANY_RETURNING
        );

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(company.handle().as_str())
            .bind(company.name())
            .bind(company.description())
            .bind(company.num_employees())
            .bind(company.logo_url())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| duplicate_or_database(e, company.handle()))?;

        Ok(row.into_domain())
    }

    async fn find_all(&self, filter: &CompanyFilter) -> Result<Vec<Company>, RepositoryError> {
        let query = QueryBuilder::company_filter(filter);
        let sql = format!(
            "{} {} ORDER BY name",
            QueryBuilder::COMPANY_SELECT,
            query.where_clause
        );
        tracing::debug!(sql = %sql, params = query.parameters.len(), "company_filter_query");

        let rows = bind_all(sqlx::query_as::<_, CompanyRow>(&sql), &query.parameters)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(CompanyRow::into_domain).collect())
    }

    async fn find_by_handle(
        &self,
        handle: &CompanyHandle,
    ) -> Result<Option<Company>, RepositoryError> {
        let sql = format!("{} WHERE handle = $1", QueryBuilder::COMPANY_SELECT);

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(handle.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(CompanyRow::into_domain))
    }

    async fn update(
        &self,
        handle: &CompanyHandle,
        changes: &Changeset,
    ) -> Result<Option<Company>, RepositoryError> {
        let set = SetClause::build(changes, &COMPANY_COLUMNS)?;
        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} {}",
            set.sql,
            set.next_placeholder(),
            QueryBuilder::COMPANY_RETURNING
        );

        let row = bind_all(sqlx::query_as::<_, CompanyRow>(&sql), &set.values)
            .bind(handle.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| duplicate_or_database(e, handle))?;

        Ok(row.map(CompanyRow::into_domain))
    }

    async fn delete(&self, handle: &CompanyHandle) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM companies WHERE handle = $1")
            .bind(handle.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct CompanyRow {
    handle: String,
    name: String,
    description: String,
    num_employees: Option<i32>,
    logo_url: Option<String>,
}

impl CompanyRow {
    fn into_domain(self) -> Company {
        Company::new(
            CompanyHandle::from_db(self.handle),
            self.name,
            self.description,
            self.num_employees,
            self.logo_url,
        )
    }
}
