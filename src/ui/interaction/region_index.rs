//! Per-frame registry of named screen regions.
//!
//! The region index plays the role a document tree plays for a selector
//! query: components register tagged rects while rendering, the index is
//! cleared at the start of every render pass, and lookups always reflect
//! the layout of the most recent frame. Anything that resolves tags at
//! event time (the outside-interaction observers in particular) therefore
//! tracks layout changes between events for free.

use ratatui::layout::Rect;

/// A name under which one or more screen rects are registered.
///
/// Tags are the TUI counterpart of a selector string: several rects may
/// share a tag, and a tag that matches nothing simply resolves empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionTag(pub &'static str);

/// Registry of tagged regions for the current frame.
#[derive(Debug, Default)]
pub struct RegionIndex {
    regions: Vec<(RegionTag, Rect)>,
}

impl RegionIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registrations.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a rect under a tag. A tag may be registered any number of
    /// times per frame.
    pub fn register(&mut self, tag: RegionTag, rect: Rect) {
        self.regions.push((tag, rect));
    }

    /// All rects currently registered under `tag`.
    pub fn resolve(&self, tag: RegionTag) -> Vec<Rect> {
        self.regions
            .iter()
            .filter(|(t, _)| *t == tag)
            .map(|(_, rect)| *rect)
            .collect()
    }

    /// True when the point lies within any rect registered under `tag`.
    ///
    /// A tag that matches nothing contains no points.
    pub fn contains(&self, tag: RegionTag, column: u16, row: u16) -> bool {
        self.regions
            .iter()
            .any(|(t, rect)| *t == tag && rect_contains(*rect, column, row))
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Half-open containment check matching how ratatui lays out rects.
#[inline]
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
