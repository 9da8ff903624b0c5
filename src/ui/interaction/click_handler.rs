//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into App state
//! mutations. Runs after the outside observers have seen the press.

use super::hit_area::ClickAction;
use crate::app::{App, Focus, Screen};

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SelectCandidate(application_id) => {
            tracing::debug!(application_id, "click: select candidate");
            app.open_detail(application_id);
        }
        ClickAction::ToggleMonthDropdown => {
            tracing::debug!("click: toggle month dropdown");
            app.toggle_month_dropdown();
        }
        ClickAction::SelectMonth(month) => {
            tracing::debug!(year = month.year, month = month.month, "click: select month");
            app.month_filter = Some(month);
            app.close_month_dropdown();
            app.refresh_candidates();
        }
        ClickAction::ClearMonthFilter => {
            tracing::debug!("click: clear month filter");
            app.month_filter = None;
            app.close_month_dropdown();
            app.refresh_candidates();
        }
        ClickAction::SetStatusFilter(filter) => {
            tracing::debug!(filter = filter.as_str(), "click: set status filter");
            app.status_filter = filter;
            app.refresh_candidates();
        }
        ClickAction::FocusSearch => {
            app.focus = Focus::Search;
        }
        ClickAction::ClearSearch => {
            tracing::debug!("click: clear search");
            app.search.clear();
            app.clamp_selection();
        }
        ClickAction::UpdateStage {
            application_id,
            action,
        } => {
            tracing::info!(application_id, action = action.as_wire(), "click: update stage");
            app.update_stage(application_id, action);
        }
        ClickAction::BackToDashboard => {
            tracing::debug!("click: back to dashboard");
            app.back_to_dashboard();
        }
    }
}
