//! Integration Tests for Fixtures Served Through a Mock Registry
//!
//! UNIT UNDER TEST: Checked-in fixtures mounted on a mock HTTP server
//!
//! BUSINESS RESPONSIBILITY:
//!   - Fixtures stand in for real Companies House responses when a proxy
//!     under test talks to a mock registry
//!   - A fixture body served over HTTP deserializes into the same value the
//!     loader produces from disk
//!   - The not-found variant works as a canned lookup miss
//!
//! TEST COVERAGE:
//!   - Serving the profile fixture from a mock endpoint
//!   - Serving the search fixture from a mock endpoint with order intact
//!   - Serving the not-found variant and reading the status field

mod common;

use common::{PROFILE_FIXTURE, PROFILE_NOT_FOUND_FIXTURE, SEARCH_FIXTURE};
use companies_house_fixtures::{
    helpers, CompaniesHouseGovUkResponse, CompaniesHouseResponse, CompanyStatus, TEST_CRN,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a fixture file as the JSON body of a mock GET endpoint.
async fn mount_fixture(server: &MockServer, endpoint: &str, fixture: &str) {
    let body: serde_json::Value = common::crate_fixture_loader()
        .load_object(fixture)
        .expect("Fixture should load as a JSON document");

    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_profile_fixture_round_trips_through_mock_registry() {
    // A profile fixture served over HTTP deserializes into the same value
    // the loader produces from disk

    let mock_server = MockServer::start().await;
    let endpoint = format!("/company/{TEST_CRN}");
    mount_fixture(&mock_server, &endpoint, PROFILE_FIXTURE).await;

    let fetched: CompaniesHouseGovUkResponse =
        reqwest::get(format!("{}{endpoint}", mock_server.uri()))
            .await
            .expect("Mock request should succeed")
            .json()
            .await
            .expect("Body should deserialize");

    let from_disk = helpers::companies_house_gov_uk_response().expect("Disk load should succeed");
    assert_eq!(fetched, from_disk);
    assert_eq!(fetched.company_number, TEST_CRN);
}

#[tokio::test]
async fn test_search_fixture_served_with_order_intact() {
    // The list fixture keeps its element order through an HTTP round trip

    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/search/companies", SEARCH_FIXTURE).await;

    let fetched: Vec<CompaniesHouseResponse> =
        reqwest::get(format!("{}/search/companies", mock_server.uri()))
            .await
            .expect("Mock request should succeed")
            .json()
            .await
            .expect("Body should deserialize");

    let from_disk = helpers::companies_house_response_list().expect("Disk load should succeed");
    assert_eq!(fetched, from_disk);
    assert_eq!(fetched[0].company_number, TEST_CRN);
}

#[tokio::test]
async fn test_not_found_fixture_acts_as_canned_lookup_miss() {
    // The 404-equivalent fixture reads back as a status-flagged miss

    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server, "/company/999999999", PROFILE_NOT_FOUND_FIXTURE).await;

    let fetched: CompaniesHouseGovUkResponse =
        reqwest::get(format!("{}/company/999999999", mock_server.uri()))
            .await
            .expect("Mock request should succeed")
            .json()
            .await
            .expect("Body should deserialize");

    assert_eq!(fetched.company_status, CompanyStatus::NotFound);
    assert!(!fetched.company_status.is_found());
}
