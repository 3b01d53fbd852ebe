use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::query_builder::QueryBuilder;
use super::sql::{bind_all, SetClause, JOB_COLUMNS};
use crate::application::dto::JobFilter;
use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::changeset::Changeset;
use crate::domain::entities::{Job, NewJob};
use crate::domain::value_objects::{CompanyHandle, JobId};

pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ($1, $2, $3, $4)
            {}
            "#,
            QueryBuilder::JOB_RETURNING
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(&job.title)
            .bind(job.salary)
            .bind(job.equity)
            .bind(job.company_handle.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into_domain())
    }

    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError> {
        let query = QueryBuilder::job_filter(filter);
        let sql = format!(
            "{} {} ORDER BY title",
            QueryBuilder::JOB_SELECT,
            query.where_clause
        );
        tracing::debug!(sql = %sql, params = query.parameters.len(), "job_filter_query");

        let rows = bind_all(sqlx::query_as::<_, JobRow>(&sql), &query.parameters)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(JobRow::into_domain).collect())
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let sql = format!("{} WHERE id = $1", QueryBuilder::JOB_SELECT);

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(JobRow::into_domain))
    }

    async fn find_by_company(&self, handle: &CompanyHandle) -> Result<Vec<Job>, RepositoryError> {
        let sql = format!(
            "{} WHERE company_handle = $1 ORDER BY id",
            QueryBuilder::JOB_SELECT
        );

        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .bind(handle.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(JobRow::into_domain).collect())
    }

    async fn update(&self, id: JobId, changes: &Changeset) -> Result<Option<Job>, RepositoryError> {
        let set = SetClause::build(changes, &JOB_COLUMNS)?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} {}",
            set.sql,
            set.next_placeholder(),
            QueryBuilder::JOB_RETURNING
        );

        let row = bind_all(sqlx::query_as::<_, JobRow>(&sql), &set.values)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(JobRow::into_domain))
    }

    async fn delete(&self, id: JobId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct JobRow {
    id: i32,
    title: String,
    salary: Option<i32>,
    equity: Option<Decimal>,
    company_handle: String,
}

impl JobRow {
    fn into_domain(self) -> Job {
        Job::reconstruct(
            JobId::new(self.id),
            self.title,
            self.salary,
            self.equity,
            CompanyHandle::from_db(self.company_handle),
        )
    }
}
