//! Companies House response model type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration status of a company, kebab-case on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyStatus {
    Active,
    Dissolved,
    Liquidation,
    Receivership,
    Administration,
    /// Synthetic status for lookups against a CRN the registry has no record
    /// of. An absent company is reported through this field, not an error.
    NotFound,
}

impl CompanyStatus {
    /// Whether the lookup resolved to a real registry record.
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// One company record as returned by the proxy's search endpoint
/// (list-oriented; fixtures hold an ordered array of these)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompaniesHouseResponse {
    pub title: String,
    pub company_number: String,
    pub company_status: CompanyStatus,
    pub company_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_creation: Option<NaiveDate>,
}

/// Direct echo of a gov.uk company profile lookup
///
/// The "CRN not found" variant is a valid instance whose `company_status` is
/// [`CompanyStatus::NotFound`] with the profile fields absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompaniesHouseGovUkResponse {
    pub company_number: String,
    pub company_status: CompanyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_creation: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_office_address: Option<RegisteredOfficeAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sic_codes: Vec<String>,
}

/// Registered office address block from a gov.uk company profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredOfficeAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
