use crate::application::dto::{CompanyFilter, JobFilter};
use crate::domain::changeset::SqlValue;

/// Common SQL query fragments to reduce duplication and ensure consistency
pub struct QueryBuilder;

impl QueryBuilder {
    /// Base SELECT clause for job queries
    pub const JOB_SELECT: &'static str = r#"
        SELECT id, title, salary, equity, company_handle
        FROM jobs
    "#;

    /// Base SELECT clause for company queries
    pub const COMPANY_SELECT: &'static str = r#"
        SELECT handle, name, description, num_employees, logo_url
        FROM companies
    "#;

    pub const JOB_RETURNING: &'static str = "RETURNING id, title, salary, equity, company_handle";

    pub const COMPANY_RETURNING: &'static str =
        "RETURNING handle, name, description, num_employees, logo_url";

    /// WHERE clause for `GET /jobs`
    pub fn job_filter(filter: &JobFilter) -> FilterQuery {
        let mut builder = WhereBuilder::new();

        if let Some(title) = &filter.title {
            let pattern = format!("%{}%", title);
            let exact = builder.bind(pattern.clone());
            let lowered = builder.bind(pattern.to_lowercase());
            builder.and(format!("(title LIKE {} OR lower(title) LIKE {})", exact, lowered));
        }

        if let Some(min_salary) = filter.min_salary {
            let placeholder = builder.bind(min_salary);
            builder.and(format!("salary > {}", placeholder));
        }

        // `false` means "no filter", not "without equity"
        if filter.has_equity == Some(true) {
            builder.and("equity > 0");
        }

        builder.finish()
    }

    /// WHERE clause for `GET /companies`
    pub fn company_filter(filter: &CompanyFilter) -> FilterQuery {
        let mut builder = WhereBuilder::new();

        if let Some(name) = &filter.name {
            let placeholder = builder.bind(format!("%{}%", name));
            builder.and(format!("name ILIKE {}", placeholder));
        }

        if let Some(min) = filter.min_employees {
            let placeholder = builder.bind(min);
            builder.and(format!("num_employees >= {}", placeholder));
        }

        if let Some(max) = filter.max_employees {
            let placeholder = builder.bind(max);
            builder.and(format!("num_employees <= {}", placeholder));
        }

        builder.finish()
    }
}

/// A rendered WHERE clause (possibly empty) and its parameters in bind order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub where_clause: String,
    pub parameters: Vec<SqlValue>,
}

/// Accumulates conjunctive conditions while handing out contiguous
/// placeholders.
#[derive(Debug)]
pub struct WhereBuilder {
    conditions: Vec<String>,
    parameters: Vec<SqlValue>,
    next: usize,
}

impl Default for WhereBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start numbering at `$start` when earlier parameters are already taken
    pub fn starting_at(start: usize) -> Self {
        Self {
            conditions: Vec::new(),
            parameters: Vec::new(),
            next: start,
        }
    }

    /// Register a parameter and return its placeholder (`$n`)
    pub fn bind(&mut self, value: impl Into<SqlValue>) -> String {
        let placeholder = format!("${}", self.next);
        self.parameters.push(value.into());
        self.next += 1;
        placeholder
    }

    /// Add a condition joined to the previous ones with `AND`
    pub fn and(&mut self, condition: impl Into<String>) {
        self.conditions.push(condition.into());
    }

    pub fn next_placeholder(&self) -> usize {
        self.next
    }

    pub fn finish(self) -> FilterQuery {
        let where_clause = if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        };

        FilterQuery {
            where_clause,
            parameters: self.parameters,
        }
    }
}
