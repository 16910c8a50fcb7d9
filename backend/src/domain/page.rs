//! One-based page selection for listing queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of items returned per page by listing queries.
pub const PAGE_SIZE: usize = 20;

/// Validation error for page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageValidationError;

impl fmt::Display for PageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page numbers start at 1")
    }
}

impl std::error::Error for PageValidationError {}

/// A validated, one-based page number.
///
/// # Examples
/// ```
/// use gym_checkin::domain::{Page, PAGE_SIZE};
///
/// let second = Page::new(2)?;
/// assert_eq!(second.offset(), PAGE_SIZE);
/// assert!(Page::new(0).is_err());
/// # Ok::<(), gym_checkin::domain::PageValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Page(u32);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(1);

    pub fn new(number: u32) -> Result<Self, PageValidationError> {
        if number == 0 {
            return Err(PageValidationError);
        }
        Ok(Self(number))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// Number of items preceding this page.
    pub fn offset(self) -> usize {
        usize::try_from(self.0 - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(PAGE_SIZE)
    }

    /// Slice the page out of an already ordered collection.
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.offset()).take(PAGE_SIZE).collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<Page> for u32 {
    fn from(value: Page) -> Self {
        value.0
    }
}

impl TryFrom<u32> for Page {
    type Error = PageValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
