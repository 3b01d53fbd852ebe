use serde::{Deserialize, Serialize};

use crate::domain::entities::Job;
use crate::domain::value_objects::CompanyHandle;

/// A company that posts jobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    handle: CompanyHandle,
    name: String,
    description: String,
    num_employees: Option<i32>,
    logo_url: Option<String>,
}

impl Company {
    pub fn new(
        handle: CompanyHandle,
        name: String,
        description: String,
        num_employees: Option<i32>,
        logo_url: Option<String>,
    ) -> Self {
        Self {
            handle,
            name,
            description,
            num_employees,
            logo_url,
        }
    }

    pub fn handle(&self) -> &CompanyHandle {
        &self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn num_employees(&self) -> Option<i32> {
        self.num_employees
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }
}

/// A company together with the jobs it currently posts
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyWithJobs {
    pub company: Company,
    pub jobs: Vec<Job>,
}
