use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CompanyHandle, JobId};

/// A job posting belonging to one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    title: String,
    salary: Option<i32>,
    equity: Option<Decimal>,
    company_handle: CompanyHandle,
}

impl Job {
    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(
        id: JobId,
        title: String,
        salary: Option<i32>,
        equity: Option<Decimal>,
        company_handle: CompanyHandle,
    ) -> Self {
        Self {
            id,
            title,
            salary,
            equity,
            company_handle,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn salary(&self) -> Option<i32> {
        self.salary
    }

    pub fn equity(&self) -> Option<Decimal> {
        self.equity
    }

    pub fn company_handle(&self) -> &CompanyHandle {
        &self.company_handle
    }

    /// Whether the job offers a non-zero equity stake
    pub fn has_equity(&self) -> bool {
        self.equity.is_some_and(|e| e > Decimal::ZERO)
    }
}

/// Data for inserting a job; the id is generated by the database
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: CompanyHandle,
}
