mod company;
mod job;

pub use company::{Company, CompanyWithJobs};
pub use job::{Job, NewJob};
