//! Cursor history for backward navigation.
//!
//! A forward-only source never issues backward cursors, so the engine records
//! "where we came from" itself: every forward navigation pushes the cursor
//! and display position of the page being left. Navigating backward pops an
//! entry and refetches at the recorded cursor.
//!
//! The stack is the authority on "are we on the first page": it is empty if
//! and only if the engine believes it is there, and its depth equals the
//! number of successful forward steps since the last reset.

use crate::domain::Cursor;

/// A recorded departure point for backward navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Cursor that addressed the page being left. `None` for the first page.
    pub cursor: Cursor,

    /// 1-based display position of the first item on the page being left.
    ///
    /// Restoring `range_start - 1` as the count of items traversed before
    /// that page keeps the display range exact regardless of how short the
    /// page being returned from was.
    pub range_start: u64,
}

/// A stack of [`HistoryEntry`] values, most recent on top.
///
/// Pushed only when moving strictly forward to a page not reached by popping;
/// a backward-then-forward walk re-pushes, since the forward leg is a new
/// forward step. Must be reset whenever the search term or sort changes, or
/// when navigating straight to the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorHistory {
    entries: Vec<HistoryEntry>,
}

impl CursorHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a forward navigation away from the given position.
    pub fn push(&mut self, cursor: Cursor, range_start: u64) {
        self.entries.push(HistoryEntry { cursor, range_start });
    }

    /// Removes and returns the most recent entry, or `None` if on the first page.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Clears the stack.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded forward steps since the last reset.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether the engine believes it is on the first page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut history = CursorHistory::new();
        history.push(None, 1);
        history.push(Some("c1".into()), 11);
        assert_eq!(history.depth(), 2);

        let top = history.pop().unwrap();
        assert_eq!(top.cursor.as_deref(), Some("c1"));
        assert_eq!(top.range_start, 11);

        let bottom = history.pop().unwrap();
        assert_eq!(bottom.cursor, None);
        assert_eq!(bottom.range_start, 1);

        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn reset_clears_all_entries() {
        let mut history = CursorHistory::new();
        history.push(None, 1);
        history.push(Some("c1".into()), 11);
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.depth(), 0);
    }
}
