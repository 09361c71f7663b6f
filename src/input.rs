//! Input adapter - turns human-entered text into validated engine input.
//!
//! Errors keep the raw text exactly as typed so a front end can show the
//! user what was wrong with it.

use std::num::IntErrorKind;

use crate::common::{Error, InputErrorKind, PageId, Result};
use crate::engine::{Capacity, ReferenceString};

/// Parse a comma-separated list of page numbers.
///
/// Whitespace around each entry is ignored. Entries may be negative.
///
/// # Errors
/// - `EmptyReferenceString` if `raw` is blank
/// - `MalformedToken` for the first entry that is not an integer,
///   including empty entries such as in `"1,,2"`
/// - `PageOutOfRange` for the first entry that is an integer but does not
///   fit in an `i64`
///
/// # Example
/// ```
/// use pagesim::input::parse_reference_string;
///
/// let refs = parse_reference_string("7, 0, 1, 2").unwrap();
/// assert_eq!(refs.len(), 4);
/// assert!(parse_reference_string("7, zero").is_err());
/// ```
pub fn parse_reference_string(raw: &str) -> Result<ReferenceString> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_input(
            raw,
            InputErrorKind::EmptyReferenceString,
        ));
    }

    let pages = raw
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token.parse::<i64>().map(PageId).map_err(|e| {
                let token = token.to_string();
                let kind = if is_overflow(e.kind()) {
                    InputErrorKind::PageOutOfRange { token, position }
                } else {
                    InputErrorKind::MalformedToken { token, position }
                };
                Error::invalid_input(raw, kind)
            })
        })
        .collect::<Result<Vec<PageId>>>()?;

    ReferenceString::new(pages)
}

/// Parse a frame count.
///
/// # Errors
/// - `MalformedCapacity` if `raw` is not an integer
/// - `ZeroCapacity` if it is zero or negative
/// - `CapacityOutOfRange` if it is too large to count frames with
pub fn parse_capacity(raw: &str) -> Result<Capacity> {
    let value = raw.trim().parse::<i64>().map_err(|e| {
        let kind = match e.kind() {
            IntErrorKind::PosOverflow => InputErrorKind::CapacityOutOfRange,
            IntErrorKind::NegOverflow => InputErrorKind::ZeroCapacity,
            _ => InputErrorKind::MalformedCapacity,
        };
        Error::invalid_input(raw, kind)
    })?;

    validate_capacity(value, raw)
}

/// Validate a frame count that arrived as a number (e.g. from a config file).
///
/// # Errors
/// - `ZeroCapacity` if `value` is zero or negative
pub fn capacity_from_i64(value: i64) -> Result<Capacity> {
    validate_capacity(value, &value.to_string())
}

fn validate_capacity(value: i64, raw: &str) -> Result<Capacity> {
    if value <= 0 {
        return Err(Error::invalid_input(raw, InputErrorKind::ZeroCapacity));
    }
    let frames = usize::try_from(value)
        .map_err(|_| Error::invalid_input(raw, InputErrorKind::CapacityOutOfRange))?;
    Capacity::new(frames)
}

fn is_overflow(kind: &IntErrorKind) -> bool {
    matches!(kind, IntErrorKind::PosOverflow | IntErrorKind::NegOverflow)
}
