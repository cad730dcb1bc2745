//! Named fixture accessors for Companies House test data.
//!
//! Each accessor is a pure partial application of the loader over a fixed
//! fixture path and target shape. All of them read from this crate's
//! `tests/fixtures` directory.

use crate::error::FixtureResult;
use crate::loader::FixtureLoader;
use crate::models::{CompaniesHouseGovUkResponse, CompaniesHouseResponse};

/// Company registration number used across the canned fixtures.
pub const TEST_CRN: &str = "111111111";

/// The list-shaped registry search response fixture.
pub fn companies_house_response_list() -> FixtureResult<Vec<CompaniesHouseResponse>> {
    FixtureLoader::default().load_collection("companies-house-response.json")
}

/// The gov.uk company profile fixture for [`TEST_CRN`].
pub fn companies_house_gov_uk_response() -> FixtureResult<CompaniesHouseGovUkResponse> {
    FixtureLoader::default().load_object("companies-house-gov-uk-response.json")
}

/// The gov.uk profile fixture for a CRN the registry has no record of.
///
/// Deserializes successfully; the absent lookup is reported through the
/// status field rather than an error.
pub fn companies_house_gov_uk_response_crn_not_found() -> FixtureResult<CompaniesHouseGovUkResponse>
{
    FixtureLoader::default().load_object("companies-house-gov-uk-response-crn-404.json")
}
