//! # Jobboard - Companies and Jobs REST Service
//!
//! A small job-board backend exposing CRUD operations over companies and
//! the jobs they post, built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Entities, value objects, changesets and domain errors
//! - **Application**: Use cases, DTOs and repository ports
//! - **Infrastructure**: PostgreSQL repositories and SQL builders
//! - **API**: HTTP handlers, middleware and OpenAPI docs
//!
//! ## Key Features
//!
//! - Partial updates rendered from typed, ordered changesets
//! - Filtered listings with contiguous placeholder numbering
//! - JWT bearer authentication with admin-gated mutations
//!
//! ## Example Usage
//!
//! ```no_run
//! use jobboard::{application::builder::ApplicationBuilder, api::create_router, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = Config::from_env();
//! let state = ApplicationBuilder::new(config)
//!     .with_database()
//!     .await?
//!     .with_infrastructure()?
//!     .build()?;
//! let app = create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
