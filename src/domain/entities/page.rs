//! Fixed-size, 1-indexed pagination.

/// Number of records returned per page.
pub const PAGE_SIZE: i64 = 10;

/// A validated page number (always ≥ 1).
///
/// Listing operations take `Option<Page>`: `None` means "return everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    /// Returns `None` for page `0`.
    pub fn new(number: u32) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Number of records to skip: `(page - 1) * PAGE_SIZE`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.0) - 1) * PAGE_SIZE
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }
}
