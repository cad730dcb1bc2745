//! # companies-house-fixtures
//!
//! Test-support crate for services that proxy the UK Companies House registry
//! API: loads canned JSON fixtures from disk and deserializes them into typed
//! response models for test setup.
//!
//! ## Key Features
//!
//! - **Typed loading**: fixtures map by field name onto serde response models
//! - **Single objects and collections**: array fixtures become ordered `Vec`s
//! - **Loud failures**: a missing or malformed fixture fails the calling test
//!   with the path and a diagnostic, never a partial value
//! - **Named accessors**: the standard registry fixtures are one call away
//!
//! ## Example
//!
//! ```rust,no_run
//! use companies_house_fixtures::{helpers, CompanyStatus};
//!
//! # fn example() -> companies_house_fixtures::FixtureResult<()> {
//! let profile = helpers::companies_house_gov_uk_response()?;
//! assert_eq!(profile.company_number, helpers::TEST_CRN);
//! assert_eq!(profile.company_status, CompanyStatus::Active);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod helpers;
pub mod loader;
pub mod models;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use error::{FixtureError, FixtureResult};
pub use helpers::TEST_CRN;
pub use loader::FixtureLoader;
pub use models::{
    CompaniesHouseGovUkResponse, CompaniesHouseResponse, CompanyStatus, RegisteredOfficeAddress,
};
