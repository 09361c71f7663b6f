//! Configuration for pagesim.
//!
//! Holds the default constants and [`SimulationConfig`], the JSON-backed
//! settings the command-line front end starts from.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::Result;
use crate::engine::{Capacity, Policy, ReferenceString};
use crate::input;

/// Number of frames used when none is given.
pub const DEFAULT_CAPACITY: i64 = 3;

/// Reference string used when none is given.
///
/// Twelve references over six distinct pages, enough to make all three
/// policies diverge at capacity 3.
pub const DEFAULT_REFERENCE_STRING: &str = "7, 0, 1, 2, 0, 3, 4, 2, 3, 0, 3, 2";

/// Settings for one simulation session.
///
/// Every field is optional in the JSON form; missing fields take the
/// defaults above. `pages` stays as raw text and `capacity` as a signed
/// integer so that bad values go through the same validation (and produce
/// the same errors) as command-line input.
///
/// # Example
/// ```
/// use pagesim::common::config::SimulationConfig;
///
/// let config = SimulationConfig::from_json(r#"{"pages": "1, 2, 1", "capacity": 2}"#).unwrap();
/// assert_eq!(config.reference_string().unwrap().len(), 3);
/// assert_eq!(config.capacity().unwrap().get(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Comma-separated page numbers.
    pub pages: String,

    /// Number of frames.
    pub capacity: i64,

    /// Policies to run, in report order.
    pub policies: Vec<Policy>,
}

impl SimulationConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    /// - `Error::Config` if the text is not a valid config object
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Config` if the contents are not a valid config object
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validate and return the reference string.
    pub fn reference_string(&self) -> Result<ReferenceString> {
        input::parse_reference_string(&self.pages)
    }

    /// Validate and return the capacity.
    pub fn capacity(&self) -> Result<Capacity> {
        input::capacity_from_i64(self.capacity)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pages: DEFAULT_REFERENCE_STRING.to_string(),
            capacity: DEFAULT_CAPACITY,
            policies: Policy::ALL.to_vec(),
        }
    }
}
