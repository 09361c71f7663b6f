//! Validated simulation inputs.
//!
//! [`ReferenceString`] and [`Capacity`] can only be built from valid values,
//! so the engine's inner loop never has to re-check its preconditions.

use std::num::NonZeroUsize;
use std::ops::Deref;

use crate::common::{Error, InputErrorKind, PageId, Result};

/// An ordered, non-empty sequence of page references.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceString};
///
/// let refs = ReferenceString::new(vec![PageId(1), PageId(2), PageId(1)]).unwrap();
/// assert_eq!(refs.len(), 3);
/// assert_eq!(refs.unique_pages(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceString(Vec<PageId>);

impl ReferenceString {
    /// Wrap a sequence of pages.
    ///
    /// # Errors
    /// - `Error::InvalidInput` with `EmptyReferenceString` if `pages` is empty
    pub fn new(pages: Vec<PageId>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::invalid_input(
                "",
                InputErrorKind::EmptyReferenceString,
            ));
        }
        Ok(Self(pages))
    }

    /// The references as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.0
    }

    /// Number of distinct pages referenced.
    pub fn unique_pages(&self) -> usize {
        let mut seen: Vec<PageId> = self.0.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

impl Deref for ReferenceString {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.0
    }
}

impl TryFrom<Vec<i64>> for ReferenceString {
    type Error = Error;

    fn try_from(pages: Vec<i64>) -> Result<Self> {
        Self::new(pages.into_iter().map(PageId).collect())
    }
}

/// Number of frames available to a simulation. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Validate a frame count.
    ///
    /// # Errors
    /// - `Error::InvalidInput` with `ZeroCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(Self)
            .ok_or_else(|| Error::invalid_input(frames.to_string(), InputErrorKind::ZeroCapacity))
    }

    /// The frame count.
    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(frames: NonZeroUsize) -> Self {
        Self(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reference_string_rejected() {
        let err = ReferenceString::new(vec![]).unwrap_err();
        assert_eq!(err.input_kind(), Some(&InputErrorKind::EmptyReferenceString));
    }

    #[test]
    fn test_reference_string_from_ints() {
        let refs = ReferenceString::try_from(vec![3, 1, 3, -2]).unwrap();
        assert_eq!(refs.as_slice()[3], PageId(-2));
        assert_eq!(refs.unique_pages(), 3);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Capacity::new(0).unwrap_err();
        assert_eq!(err.input_kind(), Some(&InputErrorKind::ZeroCapacity));
        assert_eq!(Capacity::new(4).unwrap().get(), 4);
    }
}
