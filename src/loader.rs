//! Fixture loading for canned Companies House responses.
//!
//! [`FixtureLoader`] reads a named JSON file from a fixture root directory
//! and deserializes it into a typed response model. Every load is a one-shot,
//! synchronous read-parse-return operation: no shared state, no caching, safe
//! to call concurrently from multiple tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use companies_house_fixtures::{CompaniesHouseGovUkResponse, FixtureLoader, FixtureResult};
//!
//! fn setup() -> FixtureResult<CompaniesHouseGovUkResponse> {
//!     let loader = FixtureLoader::new("tests/fixtures");
//!     loader.load_object("companies-house-gov-uk-response.json")
//! }
//! ```

use crate::error::{FixtureError, FixtureResult};
use crate::logging::log_debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads JSON fixture files from a fixed root directory into typed values.
///
/// The loader owns nothing but the root path. File handles are opened, fully
/// read, and released before each call returns, on all exit paths including
/// failure.
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    root: PathBuf,
}

impl FixtureLoader {
    /// Create a loader that resolves fixture names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory fixture names are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a fixture whose document root is a single JSON object.
    ///
    /// Reads the full file at `root/path`, parses it as JSON, and maps it by
    /// field name onto `T`. Returns one fully populated instance of `T`.
    ///
    /// Fails with [`FixtureError::FixtureNotFound`] when the path does not
    /// resolve to a readable file, and [`FixtureError::ParseError`] when the
    /// content is not valid JSON or does not satisfy `T`'s required fields.
    pub fn load_object<T: DeserializeOwned>(&self, path: &str) -> FixtureResult<T> {
        let full_path = self.root.join(path);
        let raw = Self::read(&full_path)?;

        let value = serde_json::from_str(&raw)
            .map_err(|e| FixtureError::parse_error(&full_path, e.to_string()))?;

        log_debug!(
            path = %full_path.display(),
            bytes = raw.len(),
            "Loaded fixture object"
        );
        Ok(value)
    }

    /// Load a fixture whose document root is a JSON array.
    ///
    /// Each element is mapped independently onto `T` using the same rules as
    /// [`load_object`](Self::load_object); the returned sequence preserves
    /// source order.
    ///
    /// Fails with [`FixtureError::ParseError`] when the document root is not
    /// an array or when any element fails to map.
    pub fn load_collection<T: DeserializeOwned>(&self, path: &str) -> FixtureResult<Vec<T>> {
        let full_path = self.root.join(path);
        let raw = Self::read(&full_path)?;

        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| FixtureError::parse_error(&full_path, e.to_string()))?;
        let Value::Array(elements) = document else {
            return Err(FixtureError::parse_error(
                &full_path,
                "document root is not an array",
            ));
        };

        let collection = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                serde_json::from_value(element).map_err(|e| {
                    FixtureError::parse_error(&full_path, format!("element {index}: {e}"))
                })
            })
            .collect::<FixtureResult<Vec<T>>>()?;

        log_debug!(
            path = %full_path.display(),
            elements = collection.len(),
            "Loaded fixture collection"
        );
        Ok(collection)
    }

    fn read(path: &Path) -> FixtureResult<String> {
        fs::read_to_string(path).map_err(|e| FixtureError::fixture_not_found(path, e))
    }
}

impl Default for FixtureLoader {
    /// A loader rooted at this crate's own `tests/fixtures` directory.
    ///
    /// Downstream crates with their own fixture trees should use
    /// [`FixtureLoader::new`] instead.
    fn default() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
    }
}
