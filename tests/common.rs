//! Test helper utilities for companies-house-fixtures integration tests
//!
//! This module provides the fixture file names and loader construction
//! shared across the integration test binaries.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use companies_house_fixtures::FixtureLoader;

/// List-shaped registry search response fixture.
pub const SEARCH_FIXTURE: &str = "companies-house-response.json";

/// Single-object gov.uk company profile fixture.
pub const PROFILE_FIXTURE: &str = "companies-house-gov-uk-response.json";

/// Single-object gov.uk profile fixture for an unknown CRN.
pub const PROFILE_NOT_FOUND_FIXTURE: &str = "companies-house-gov-uk-response-crn-404.json";

/// Create a loader rooted at this crate's checked-in fixture directory.
pub fn crate_fixture_loader() -> FixtureLoader {
    FixtureLoader::default()
}
