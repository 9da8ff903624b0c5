//! Color theme constants for the HireTrack UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected table row background
pub const COLOR_SELECTION_BG: Color = Color::Rgb(30, 30, 46);

/// Pending applications - yellow
pub const COLOR_PENDING: Color = Color::Yellow;

/// Accepted applications - green
pub const COLOR_ACCEPTED: Color = Color::LightGreen;

/// Rejected applications - red
pub const COLOR_REJECTED: Color = Color::Red;

/// Stage-ladder rung already passed
pub const COLOR_STAGE_DONE: Color = Color::Rgb(4, 181, 117);

/// Current stage marker
pub const COLOR_STAGE_CURRENT: Color = Color::Cyan;

/// Background for the month dropdown overlay
pub const COLOR_DROPDOWN_BG: Color = Color::Rgb(10, 15, 35);

use crate::models::ApplicationStatus;

/// Color used for a status badge.
pub fn status_color(status: ApplicationStatus) -> Color {
    match status {
        ApplicationStatus::Pending => COLOR_PENDING,
        ApplicationStatus::Accepted => COLOR_ACCEPTED,
        ApplicationStatus::Rejected => COLOR_REJECTED,
    }
}
