//! Hit area registry for mouse interactions.
//!
//! Components register clickable regions during rendering, and the event
//! loop queries the registry to determine what action a press should
//! trigger. The registry is cleared at the start of each render cycle.

use super::region_index::rect_contains;
use crate::models::{MonthRef, StageAction, StatusFilter};
use ratatui::layout::Rect;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickAction {
    /// Open the detail screen for an application
    SelectCandidate(i64),
    /// Open or close the month filter dropdown
    ToggleMonthDropdown,
    /// Pick a month entry inside the dropdown
    SelectMonth(MonthRef),
    /// Drop the month filter (the "All months" dropdown entry)
    ClearMonthFilter,
    /// Switch the status filter tab
    SetStatusFilter(StatusFilter),
    /// Put keyboard focus on the search field
    FocusSearch,
    /// Reset the search string
    ClearSearch,
    /// Advance or reject from the detail screen
    UpdateStage {
        application_id: i64,
        action: StageAction,
    },
    /// Leave the detail screen
    BackToDashboard,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.rect, column, row)
    }
}

/// Registry for managing hit areas across the UI.
///
/// Areas registered later take priority over earlier ones for overlapping
/// regions (z-order: later = on top), so overlays such as the month
/// dropdown register after the table beneath them.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point,
    /// or None if no area was hit. Areas are checked in reverse order
    /// (last registered = highest priority).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(column, row))
            .map(|area| area.action.clone())
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
