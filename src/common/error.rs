//! Error types for pagesim.

use std::fmt;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation algorithms themselves cannot fail. Every variant here is
/// raised at a boundary: input validation, config loading, or export.
#[derive(Debug, Error)]
pub enum Error {
    /// The reference string or capacity was rejected.
    ///
    /// `input` is the raw text (or value) exactly as the caller supplied it.
    #[error("invalid input {input:?}: {kind}")]
    InvalidInput { input: String, kind: InputErrorKind },

    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`SimulationConfig`](crate::common::config::SimulationConfig).
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// A summary table could not be serialized.
    #[error("export failed: {0}")]
    Export(String),
}

impl Error {
    /// Build an [`Error::InvalidInput`] from the raw input text.
    pub fn invalid_input(input: impl Into<String>, kind: InputErrorKind) -> Self {
        Error::InvalidInput {
            input: input.into(),
            kind,
        }
    }

    /// The validation failure, if this is an input error.
    pub fn input_kind(&self) -> Option<&InputErrorKind> {
        match self {
            Error::InvalidInput { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// The specific reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Capacity was zero or negative.
    ZeroCapacity,

    /// Capacity text did not parse as an integer.
    MalformedCapacity,

    /// Capacity is an integer too large to count frames with.
    CapacityOutOfRange,

    /// Reference string had no entries.
    EmptyReferenceString,

    /// One entry of the reference string did not parse as an integer.
    ///
    /// `position` is zero-based; the message counts entries from 1.
    MalformedToken { token: String, position: usize },

    /// One entry of the reference string is an integer outside the `i64`
    /// page-number range.
    PageOutOfRange { token: String, position: usize },
}

impl fmt::Display for InputErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputErrorKind::ZeroCapacity => write!(f, "capacity must be >= 1"),
            InputErrorKind::MalformedCapacity => write!(f, "capacity must be an integer"),
            InputErrorKind::CapacityOutOfRange => write!(f, "capacity is too large"),
            InputErrorKind::EmptyReferenceString => {
                write!(f, "reference string must contain at least one entry")
            }
            InputErrorKind::MalformedToken { token, position } => {
                write!(f, "entry {} ({:?}) is not an integer", position + 1, token)
            }
            InputErrorKind::PageOutOfRange { token, position } => {
                write!(f, "entry {} ({:?}) is out of range", position + 1, token)
            }
        }
    }
}
