//! Central application state and message handling.
//!
//! The `App` owns everything the render and event paths touch: the fetched
//! data, the active filters, the per-frame interaction registries, and the
//! unbounded message channel that background fetch tasks report into.

use crate::client::PipelineClient;
use crate::config::AppConfig;
use crate::models::{
    ApplicationDetails, Candidate, MonthRef, StageAction, StageUpdateOutcome, StatusFilter,
};
use crate::search::SearchState;
use crate::ui::interaction::{
    HitAreaRegistry, OutsideHandle, OutsideObservers, PointerEvent, RegionIndex, RegionTag,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Region tag for the month dropdown overlay (the detector's surface).
pub const MONTH_DROPDOWN: RegionTag = RegionTag("month-dropdown");
/// Region tag for the button that toggles the dropdown (the exclusion).
pub const MONTH_TOGGLE: RegionTag = RegionTag("month-toggle");

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Detail,
}

/// Which element owns keyboard input on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Search,
}

/// Messages posted into the app from background tasks and observers.
#[derive(Debug)]
pub enum AppMessage {
    CandidatesLoaded(Vec<Candidate>),
    MonthsLoaded(Vec<MonthRef>),
    DetailsLoaded(Box<ApplicationDetails>),
    StageUpdated(StageUpdateOutcome),
    RequestFailed(String),
    /// Posted by the outside observer when a press lands outside the
    /// month dropdown and its toggle button.
    DismissMonthDropdown,
}

/// Top-level application state.
pub struct App {
    pub client: Arc<PipelineClient>,
    pub screen: Screen,
    pub focus: Focus,

    /// Rows currently fetched from the backend
    pub candidates: Vec<Candidate>,
    /// Entries offered in the month dropdown
    pub months: Vec<MonthRef>,
    /// Active month filter; None = all months
    pub month_filter: Option<MonthRef>,
    pub status_filter: StatusFilter,
    pub search: SearchState,
    /// Selected row index into `visible_candidates`
    pub selected_row: usize,
    pub detail: Option<ApplicationDetails>,
    pub loading: bool,
    /// Transient status/error line shown in the footer
    pub status_line: Option<String>,

    /// Outside-observer handle; Some iff the month dropdown is open
    month_dropdown: Option<OutsideHandle>,

    pub hit_registry: HitAreaRegistry,
    pub regions: RegionIndex,
    pub outside: OutsideObservers,

    pub needs_redraw: bool,
    pub should_quit: bool,

    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop (it needs ownership for `select!`)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create a new App from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(PipelineClient::with_base_url(config.base_url.clone())),
            screen: Screen::Dashboard,
            focus: Focus::Table,
            candidates: Vec::new(),
            months: Vec::new(),
            month_filter: None,
            status_filter: StatusFilter::All,
            search: SearchState::new(),
            selected_row: 0,
            detail: None,
            loading: false,
            status_line: None,
            month_dropdown: None,
            hit_registry: HitAreaRegistry::new(),
            regions: RegionIndex::new(),
            outside: OutsideObservers::new(),
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// True while the month dropdown overlay is open.
    pub fn month_dropdown_open(&self) -> bool {
        self.month_dropdown.is_some()
    }

    /// Candidates passing the live search filter, in fetch order.
    ///
    /// Month and status filtering happen server-side; the search string is
    /// applied client-side on every render.
    pub fn visible_candidates(&self) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|c| self.search.matches(c))
            .collect()
    }

    /// Application id of the currently selected visible row.
    pub fn selected_application_id(&self) -> Option<i64> {
        self.visible_candidates()
            .get(self.selected_row)
            .map(|c| c.application_id)
    }

    /// Clamp the row selection to the visible list.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_candidates().len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    // ========================================================================
    // Month dropdown lifecycle
    // ========================================================================

    /// Open the month dropdown and attach its outside observer.
    ///
    /// The observer's surface is the dropdown overlay; the toggle button is
    /// excluded so that clicking it again toggles instead of dismiss-then-
    /// reopen. The callback posts a message rather than mutating state
    /// directly, keeping dismissal on the ordinary message path.
    pub fn open_month_dropdown(&mut self) {
        let tx = self.message_tx.clone();
        let handle = self.outside.attach(
            MONTH_DROPDOWN,
            Some(MONTH_TOGGLE),
            Box::new(move |_event: PointerEvent| {
                let _ = tx.send(AppMessage::DismissMonthDropdown);
            }),
        );
        self.month_dropdown = Some(handle);
        self.mark_dirty();
    }

    /// Close the month dropdown and detach its observer.
    ///
    /// Safe to call when already closed; detach is idempotent.
    pub fn close_month_dropdown(&mut self) {
        if let Some(handle) = self.month_dropdown.take() {
            self.outside.detach(handle);
            self.mark_dirty();
        }
    }

    /// Toggle the dropdown from the toggle button or keyboard.
    pub fn toggle_month_dropdown(&mut self) {
        if self.month_dropdown.is_some() {
            self.close_month_dropdown();
        } else {
            self.open_month_dropdown();
        }
    }

    // ========================================================================
    // Data fetching
    // ========================================================================

    /// Refresh the candidate list for the active month/status filters.
    pub fn refresh_candidates(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let month = self.month_filter;
        let status = self.status_filter;
        self.loading = true;
        self.mark_dirty();

        tokio::spawn(async move {
            match client.fetch_candidates(month, status).await {
                Ok(candidates) => {
                    let _ = tx.send(AppMessage::CandidatesLoaded(candidates));
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch candidates");
                    let _ = tx.send(AppMessage::RequestFailed(e.to_string()));
                }
            }
        });
    }

    /// Load the month dropdown entries.
    ///
    /// Never fails: the client degrades through its fallback chain.
    pub fn refresh_months(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let months = client.fetch_available_months().await;
            let _ = tx.send(AppMessage::MonthsLoaded(months));
        });
    }

    /// Open the detail screen for an application.
    pub fn open_detail(&mut self, application_id: i64) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.screen = Screen::Detail;
        self.detail = None;
        self.loading = true;
        self.close_month_dropdown();
        self.mark_dirty();

        tokio::spawn(async move {
            match client.fetch_application_details(application_id).await {
                Ok(details) => {
                    let _ = tx.send(AppMessage::DetailsLoaded(Box::new(details)));
                }
                Err(e) => {
                    tracing::error!(application_id, error = %e, "failed to fetch details");
                    let _ = tx.send(AppMessage::RequestFailed(e.to_string()));
                }
            }
        });
    }

    /// Advance or reject the application shown on the detail screen.
    pub fn update_stage(&mut self, application_id: i64, action: StageAction) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.loading = true;
        self.mark_dirty();

        tokio::spawn(async move {
            match client.update_stage(application_id, action).await {
                Ok(outcome) => {
                    let _ = tx.send(AppMessage::StageUpdated(outcome));
                }
                Err(e) => {
                    tracing::error!(application_id, error = %e, "failed to update stage");
                    let _ = tx.send(AppMessage::RequestFailed(e.to_string()));
                }
            }
        });
    }

    /// Return from the detail screen to the dashboard.
    pub fn back_to_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        self.detail = None;
        self.mark_dirty();
    }

    // ========================================================================
    // Message handling
    // ========================================================================

    /// Apply a message posted by a background task or observer.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CandidatesLoaded(candidates) => {
                self.candidates = candidates;
                self.loading = false;
                self.status_line = None;
                self.clamp_selection();
            }
            AppMessage::MonthsLoaded(months) => {
                self.months = months;
            }
            AppMessage::DetailsLoaded(details) => {
                self.detail = Some(*details);
                self.loading = false;
                self.status_line = None;
            }
            AppMessage::StageUpdated(outcome) => {
                self.loading = false;
                self.status_line = Some(format!(
                    "Application {} is now {}",
                    outcome.application_id,
                    outcome.status.as_str()
                ));
                // Refresh both views so the new stage/status shows up.
                if self.screen == Screen::Detail {
                    self.open_detail(outcome.application_id);
                }
                self.refresh_candidates();
            }
            AppMessage::RequestFailed(message) => {
                self.loading = false;
                self.status_line = Some(format!("Request failed: {}", message));
            }
            AppMessage::DismissMonthDropdown => {
                self.close_month_dropdown();
            }
        }
        self.mark_dirty();
    }
}
