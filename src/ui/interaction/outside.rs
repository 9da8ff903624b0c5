//! Outside-interaction observers for dismissable surfaces.
//!
//! An observer watches every pointer press and fires a callback exactly when
//! the press lands outside its surface and outside an optional exclusion tag
//! (e.g. the button that toggles the surface open). The event loop must call
//! [`OutsideObservers::notify`] before hit-area dispatch for every press:
//! observers see the event first, so a handler that consumes the click cannot
//! hide it from them. Both the surface and the exclusion tag are resolved
//! against the [`RegionIndex`] at event time, never cached at attach time, so
//! a toggle button that appears on a later frame still excludes correctly.

use super::region_index::{RegionIndex, RegionTag};

/// A pointer press at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Callback invoked with the triggering event.
pub type OutsideCallback = Box<dyn FnMut(PointerEvent)>;

/// Opaque handle for one active observer registration.
///
/// Required for symmetric teardown. Handles are unique for the lifetime of
/// the registry; a handle that has been detached (or replaced by a re-attach
/// of the same surface) is inert and can never remove another observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsideHandle(u64);

struct Attachment {
    handle: OutsideHandle,
    surface: RegionTag,
    exclude: Option<RegionTag>,
    on_outside: OutsideCallback,
}

/// Registry of outside-interaction observers.
///
/// At most one observer is registered per surface: attaching a surface that
/// is already attached replaces the prior registration rather than adding a
/// second one, so a single press can never fire the same surface twice.
#[derive(Default)]
pub struct OutsideObservers {
    attachments: Vec<Attachment>,
    next_handle: u64,
}

impl OutsideObservers {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for `surface`.
    ///
    /// `on_outside` fires synchronously for every press outside the surface
    /// and outside all rects currently registered under `exclude`. When
    /// `exclude` is `None` the exclusion set is always empty. Re-attaching a
    /// surface replaces its prior registration and invalidates the old
    /// handle.
    pub fn attach(
        &mut self,
        surface: RegionTag,
        exclude: Option<RegionTag>,
        on_outside: OutsideCallback,
    ) -> OutsideHandle {
        // One observer per surface: replace, never duplicate.
        self.attachments.retain(|a| a.surface != surface);

        self.next_handle += 1;
        let handle = OutsideHandle(self.next_handle);
        self.attachments.push(Attachment {
            handle,
            surface,
            exclude,
            on_outside,
        });
        tracing::debug!(surface = surface.0, ?exclude, "outside observer attached");
        handle
    }

    /// Remove the observer identified by `handle`.
    ///
    /// Idempotent: detaching an already-detached or stale handle is a no-op.
    pub fn detach(&mut self, handle: OutsideHandle) {
        let before = self.attachments.len();
        self.attachments.retain(|a| a.handle != handle);
        if self.attachments.len() != before {
            tracing::debug!(handle = handle.0, "outside observer detached");
        }
    }

    /// True while `handle` identifies an active registration.
    pub fn is_attached(&self, handle: OutsideHandle) -> bool {
        self.attachments.iter().any(|a| a.handle == handle)
    }

    /// Number of active registrations.
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    /// True when no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    /// Dispatch a pointer press to every observer.
    ///
    /// Must run before hit-area dispatch (capture ordering). The surface and
    /// exclusion rects are resolved fresh from `index` for this event; an
    /// exclusion tag that matches nothing right now excludes nothing for
    /// this event only.
    pub fn notify(&mut self, event: PointerEvent, index: &RegionIndex) {
        for attachment in &mut self.attachments {
            let inside_surface = index.contains(attachment.surface, event.column, event.row);
            if inside_surface {
                continue;
            }

            let inside_excluded = attachment
                .exclude
                .is_some_and(|tag| index.contains(tag, event.column, event.row));
            if inside_excluded {
                continue;
            }

            (attachment.on_outside)(event);
        }
    }
}
