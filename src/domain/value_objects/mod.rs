mod company_handle;
mod job_id;

pub use company_handle::CompanyHandle;
pub use job_id::JobId;
