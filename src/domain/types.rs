//! Strongly-typed value objects shared by the search layer.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One-based page number as seen by the user interface.
///
/// The remote Data API counts pages from zero; this wrapper keeps the
/// boundary conversion in one place so the off-by-one mapping stays
/// consistent in both directions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number, treating zero as the first page.
    pub fn new(value: usize) -> Self {
        Self(value.max(1))
    }

    /// Converts a zero-based transport index back into a page number.
    pub const fn from_zero_based(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the one-based value shown to the user.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the zero-based index transmitted to the Data API.
    pub const fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PageNumber> for usize {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::PageNumber;

    #[test]
    fn zero_clamps_to_first_page() {
        assert_eq!(PageNumber::new(0), PageNumber::FIRST);
        assert_eq!(PageNumber::new(0).zero_based(), 0);
    }

    #[test]
    fn round_trips_through_transport_index() {
        let page = PageNumber::new(3);
        assert_eq!(page.zero_based(), 2);
        assert_eq!(PageNumber::from_zero_based(page.zero_based()), page);
    }
}
