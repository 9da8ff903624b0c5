//! Reusable UI components.

pub mod search_field;
pub mod status_tabs;

pub use search_field::render_search_field;
pub use status_tabs::render_status_tabs;
