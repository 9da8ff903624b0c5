//! UI rendering for the HireTrack TUI.
//!
//! Rendering and interaction are coupled through two per-frame registries
//! owned by the `App`: the hit-area registry (what a click triggers) and
//! the region index (tagged rects the outside observers resolve at event
//! time). Both are cleared at the start of every render pass so they always
//! describe the frame actually on screen.

mod dashboard;
mod detail;
pub mod components;
pub mod interaction;
pub mod layout;
pub mod theme;

pub use interaction::handle_click_action;
pub use layout::LayoutContext;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Render the UI based on the current screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();
    app.regions.clear();

    match app.screen {
        Screen::Dashboard => dashboard::render_dashboard(frame, app),
        Screen::Detail => detail::render_detail(frame, app),
    }
}
