//! Display range computation.
//!
//! Converts the engine's cumulative item count into the 1-based inclusive
//! "start–end of total" range a listing UI renders, e.g. `11–20 of 143`.

use serde::{Deserialize, Serialize};

/// The 1-based inclusive display range of the currently loaded page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
    /// Position of the first displayed item, 1-based. Zero when empty.
    pub start: u64,

    /// Position of the last displayed item, 1-based. Zero when empty.
    pub end: u64,

    /// Total items matching the active filter, if known.
    pub total: Option<u64>,
}

/// Computes the display range from the cumulative count.
///
/// `cumulative_count` is the running total of items traversed forward since
/// the last reset, including the current page; it equals the range end. An
/// empty page yields the `{0, 0, total}` range rather than a degenerate
/// 1-based one.
#[must_use]
pub fn compute(cumulative_count: u64, items_on_page: usize, total: Option<u64>) -> ItemRange {
    if items_on_page == 0 {
        return ItemRange { start: 0, end: 0, total };
    }

    let items = items_on_page as u64;
    ItemRange {
        start: cumulative_count.saturating_sub(items - 1).max(1),
        end: cumulative_count.max(1),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_first_page() {
        let range = compute(10, 10, Some(25));
        assert_eq!(range, ItemRange { start: 1, end: 10, total: Some(25) });
    }

    #[test]
    fn middle_page() {
        let range = compute(20, 10, Some(25));
        assert_eq!(range, ItemRange { start: 11, end: 20, total: Some(25) });
    }

    #[test]
    fn short_last_page() {
        let range = compute(25, 5, Some(25));
        assert_eq!(range, ItemRange { start: 21, end: 25, total: Some(25) });
    }

    #[test]
    fn empty_page_is_zero_zero() {
        let range = compute(0, 0, Some(0));
        assert_eq!(range, ItemRange { start: 0, end: 0, total: Some(0) });
    }

    #[test]
    fn unknown_total_is_preserved() {
        let range = compute(7, 7, None);
        assert_eq!(range, ItemRange { start: 1, end: 7, total: None });
    }
}
