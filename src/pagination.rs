//! The page counter shown under the transactions table.
//!
//! The counter only changes through the "Previous" and "Next" buttons. It is
//! not checked against the number of transactions and does not change which
//! transactions are rendered.

use std::{fmt, num::NonZeroU64};

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(NonZeroU64);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroU64::MIN);

    /// Create a page number, or `None` if `page` is zero.
    pub fn new(page: u64) -> Option<Self> {
        NonZeroU64::new(page).map(Self)
    }

    /// The page number as an integer.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Whether there is a page before this one.
    pub fn has_previous(self) -> bool {
        self > Self::FIRST
    }

    /// The page before this one. The first page stays on the first page.
    pub fn previous(self) -> Self {
        Self::new(self.get() - 1).unwrap_or(Self::FIRST)
    }

    /// The page after this one. There is no upper bound other than `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
