//! Postgres job repository tests
//!
//! Each test gets its own database from `#[sqlx::test]`, loaded with the
//! schema and seed fixtures (three companies, three jobs with ids 1..=3).

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::PgPool;

use jobboard::application::dto::JobFilter;
use jobboard::application::ports::{JobRepository, RepositoryError};
use jobboard::domain::changeset::{Changeset, SqlValue};
use jobboard::domain::entities::{Job, NewJob};
use jobboard::domain::errors::DomainError;
use jobboard::domain::value_objects::{CompanyHandle, JobId};
use jobboard::infrastructure::persistence::PostgresJobRepository;

fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.title()).collect()
}

fn handle(value: &str) -> CompanyHandle {
    value.parse().expect("valid handle")
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_without_filter_orders_by_title(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let jobs = repo.find_all(&JobFilter::default()).await.unwrap();

    assert_eq!(titles(&jobs), vec!["Podiatrist", "Psychologist", "Transporter"]);
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_min_salary_is_strict(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let filter = JobFilter {
        min_salary: Some(68001),
        ..Default::default()
    };
    let jobs = repo.find_all(&filter).await.unwrap();
    assert_eq!(titles(&jobs), vec!["Psychologist", "Transporter"]);

    let filter = JobFilter {
        min_salary: Some(68000),
        ..Default::default()
    };
    let jobs = repo.find_all(&filter).await.unwrap();
    assert!(!titles(&jobs).contains(&"Podiatrist"));
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_has_equity(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let with_equity = JobFilter {
        has_equity: Some(true),
        ..Default::default()
    };
    let jobs = repo.find_all(&with_equity).await.unwrap();
    assert_eq!(titles(&jobs), vec!["Transporter"]);
    assert_eq!(jobs[0].equity(), Some(Decimal::from_str("0.091").unwrap()));

    // `false` is the same as not filtering
    let without = JobFilter {
        has_equity: Some(false),
        ..Default::default()
    };
    let jobs = repo.find_all(&without).await.unwrap();
    assert_eq!(jobs.len(), 3);
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_title_is_case_insensitive(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let filter = JobFilter {
        title: Some("ist".to_string()),
        ..Default::default()
    };
    let jobs = repo.find_all(&filter).await.unwrap();
    assert_eq!(titles(&jobs), vec!["Podiatrist", "Psychologist"]);

    let filter = JobFilter {
        title: Some("PSYCH".to_string()),
        ..Default::default()
    };
    let jobs = repo.find_all(&filter).await.unwrap();
    assert_eq!(titles(&jobs), vec!["Psychologist"]);
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_combines_filters(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let filter = JobFilter {
        title: Some("o".to_string()),
        min_salary: Some(100_000),
        has_equity: Some(true),
    };
    let jobs = repo.find_all(&filter).await.unwrap();

    assert_eq!(titles(&jobs), vec!["Transporter"]);
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_all_filters_at_salary_boundary(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let just_below = JobFilter {
        title: Some("Transporter".to_string()),
        min_salary: Some(122999),
        has_equity: Some(true),
    };
    let jobs = repo.find_all(&just_below).await.unwrap();
    assert_eq!(titles(&jobs), vec!["Transporter"]);

    // Salary 123000 is not strictly greater than itself
    let equal = JobFilter {
        min_salary: Some(123000),
        ..just_below
    };
    assert!(repo.find_all(&equal).await.unwrap().is_empty());
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_all_no_match_is_empty(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let filter = JobFilter {
        title: Some("astronaut".to_string()),
        ..Default::default()
    };

    assert!(repo.find_all(&filter).await.unwrap().is_empty());
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn find_by_id_and_by_company(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let job = repo.find_by_id(JobId::new(1)).await.unwrap().unwrap();
    assert_eq!(job.title(), "Psychologist");
    assert_eq!(job.salary(), Some(172000));
    assert_eq!(job.company_handle().as_str(), "c1");

    assert!(repo.find_by_id(JobId::new(999)).await.unwrap().is_none());

    let jobs = repo.find_by_company(&handle("c2")).await.unwrap();
    assert_eq!(titles(&jobs), vec!["Podiatrist"]);
    assert_eq!(jobs[0].equity(), None);
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn create_returns_generated_id(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let new_job = NewJob {
        title: "Welder".to_string(),
        salary: Some(55_000),
        equity: Some(Decimal::from_str("0.25").unwrap()),
        company_handle: handle("c1"),
    };
    let created = repo.create(&new_job).await.unwrap();

    assert_eq!(created.title(), "Welder");
    assert_eq!(created.equity(), Some(Decimal::from_str("0.25").unwrap()));

    let found = repo.find_by_id(created.id()).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn create_for_unknown_company_is_a_database_error(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let new_job = NewJob {
        title: "Ghost".to_string(),
        salary: None,
        equity: None,
        company_handle: handle("nope"),
    };

    assert!(matches!(
        repo.create(&new_job).await,
        Err(RepositoryError::Database(_))
    ));
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn update_applies_values_and_nulls(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let changes = Changeset::new()
        .set("title", "Senior Psychologist")
        .set("salary", SqlValue::Int(None));
    let job = repo
        .update(JobId::new(1), &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(job.id(), JobId::new(1));
    assert_eq!(job.title(), "Senior Psychologist");
    assert_eq!(job.salary(), None);
    // Untouched columns keep their values
    assert_eq!(job.equity(), Some(Decimal::ZERO));
    assert_eq!(job.company_handle().as_str(), "c1");
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn update_missing_job_returns_none(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let changes = Changeset::new().set("title", "Nobody");

    assert!(repo
        .update(JobId::new(999), &changes)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn update_with_empty_changeset_is_rejected(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    let result = repo.update(JobId::new(1), &Changeset::new()).await;

    assert!(matches!(
        result,
        Err(RepositoryError::InvalidInput(DomainError::NoData))
    ));
}

#[sqlx::test(fixtures("schema", "seed"))]
async fn delete_removes_once(pool: PgPool) {
    let repo = PostgresJobRepository::new(pool);

    assert!(repo.delete(JobId::new(2)).await.unwrap());
    assert!(repo.find_by_id(JobId::new(2)).await.unwrap().is_none());
    assert!(!repo.delete(JobId::new(2)).await.unwrap());
}
