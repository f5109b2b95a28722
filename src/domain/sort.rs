//! Sort state types and the sort coordinator.
//!
//! This module defines the single-field sort model: at most one field is
//! sorted at a time, in one of two directions, or no sort is active at all.
//! [`SortCoordinator`] tracks the active sort, reports whether an update
//! actually changed it, and converts it to the wire-level order descriptor a
//! source understands.
//!
//! Multi-column compound sorting is deliberately not modeled.

use serde::{Deserialize, Serialize};

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest values first.
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the conventional wire keyword for this direction.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// The active sort: one field, one direction.
///
/// Wrapped in `Option` wherever "no sort" is a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Identifier of the sorted field, as the source names it.
    pub field: String,

    /// Direction of the sort.
    pub direction: SortDirection,
}

impl SortState {
    /// Creates an ascending sort on `field`.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on `field`.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Converts this sort to its wire-level order descriptor.
    #[must_use]
    pub fn descriptor(&self) -> OrderDescriptor {
        OrderDescriptor {
            field: self.field.clone(),
            direction: self.direction.keyword().to_string(),
        }
    }
}

/// Wire-level order descriptor sent to the source.
///
/// The shape a GraphQL `orderBy` argument typically takes: a field name plus
/// an `ASC`/`DESC` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDescriptor {
    /// Field identifier, verbatim from [`SortState::field`].
    pub field: String,

    /// Direction keyword, `"ASC"` or `"DESC"`.
    pub direction: String,
}

/// Tracks the single active sort and detects changes.
///
/// The coordinator is the one place sort state is mutated. Both mutation
/// methods report whether the sort actually changed so the caller can skip
/// the pagination reset and refetch when it did not.
///
/// # Examples
///
/// ```
/// use backpager::domain::{SortCoordinator, SortDirection};
///
/// let mut sort = SortCoordinator::default();
/// assert!(sort.toggle("name"));
/// assert_eq!(sort.active().unwrap().direction, SortDirection::Ascending);
///
/// // Toggling the same field flips the direction.
/// assert!(sort.toggle("name"));
/// assert_eq!(sort.active().unwrap().direction, SortDirection::Descending);
///
/// // Setting the identical sort is reported as unchanged.
/// let current = sort.active().cloned();
/// assert!(!sort.set(current));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortCoordinator {
    active: Option<SortState>,
}

impl SortCoordinator {
    /// Creates a coordinator with no active sort.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active sort, if any.
    #[must_use]
    pub fn active(&self) -> Option<&SortState> {
        self.active.as_ref()
    }

    /// Replaces the active sort. Returns `true` if it changed.
    pub fn set(&mut self, sort: Option<SortState>) -> bool {
        if self.active == sort {
            return false;
        }
        tracing::debug!(old = ?self.active, new = ?sort, "sort changed");
        self.active = sort;
        true
    }

    /// Cycles the sort on `field`: inactive → ascending → descending.
    ///
    /// Toggling a field other than the active one replaces the sort with an
    /// ascending sort on that field, matching how a column-header click
    /// behaves in a listing UI. Returns `true` if the sort changed, which a
    /// toggle always does.
    pub fn toggle(&mut self, field: &str) -> bool {
        let next = match &self.active {
            Some(current) if current.field == field => Some(SortState {
                field: field.to_string(),
                direction: current.direction.flipped(),
            }),
            _ => Some(SortState::ascending(field)),
        };
        self.set(next)
    }

    /// Converts the active sort to its wire-level descriptor, if any.
    #[must_use]
    pub fn descriptor(&self) -> Option<OrderDescriptor> {
        self.active.as_ref().map(SortState::descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_detects_no_change() {
        let mut sort = SortCoordinator::new();
        assert!(!sort.set(None));
        assert!(sort.set(Some(SortState::ascending("name"))));
        assert!(!sort.set(Some(SortState::ascending("name"))));
        assert!(sort.set(Some(SortState::descending("name"))));
        assert!(sort.set(None));
    }

    #[test]
    fn toggle_cycles_direction_then_switches_field() {
        let mut sort = SortCoordinator::new();
        sort.toggle("name");
        assert_eq!(sort.active(), Some(&SortState::ascending("name")));
        sort.toggle("name");
        assert_eq!(sort.active(), Some(&SortState::descending("name")));
        sort.toggle("email");
        assert_eq!(sort.active(), Some(&SortState::ascending("email")));
    }

    #[test]
    fn descriptor_uses_wire_keywords() {
        let desc = SortState::descending("createdAt").descriptor();
        assert_eq!(desc.field, "createdAt");
        assert_eq!(desc.direction, "DESC");

        let empty = SortCoordinator::new();
        assert!(empty.descriptor().is_none());
    }
}
