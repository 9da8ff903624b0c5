//! Pipeline API client for backend communication.
//!
//! This module provides the HTTP client for the HireTrack backend. Transport
//! and server failures are logged at the call site and propagated unchanged
//! to the caller, with one exception: the available-months lookup degrades
//! through two fallback strategies instead of surfacing an error.

use crate::models::{
    ApplicationDetails, Candidate, MonthRef, StageAction, StageUpdateOutcome, StatusFilter,
};
use chrono::{Datelike, Local, NaiveDate};
use reqwest::Client;
use std::collections::HashSet;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Error type for pipeline client operations
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    ServerError { status: u16, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::Json(e) => write!(f, "JSON error: {}", e),
            ClientError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Json(e) => Some(e),
            ClientError::ServerError { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Json(e)
    }
}

/// Client for the HireTrack pipeline backend.
///
/// Wraps a reusable [`reqwest::Client`] with typed methods for the four
/// operations the TUI consumes: list candidates by month, application
/// details, stage updates, and the available-months lookup.
pub struct PipelineClient {
    /// Base URL for the pipeline API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl PipelineClient {
    /// Create a new PipelineClient with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new PipelineClient with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch candidate application summaries, optionally scoped to a month.
    ///
    /// Sends a POST request to `/applications/by-month/detailed`. When
    /// `month` is `None` the backend returns all applications regardless of
    /// date. `status` narrows the result set server-side; `StatusFilter::All`
    /// disables status filtering.
    pub async fn fetch_candidates(
        &self,
        month: Option<MonthRef>,
        status: StatusFilter,
    ) -> Result<Vec<Candidate>, ClientError> {
        let url = format!("{}/applications/by-month/detailed", self.base_url);

        let body = serde_json::json!({
            "year": month.map(|m| m.year),
            "month": month.map(|m| m.month),
            "status_filter": status.as_str(),
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let response = check_status(response).await?;

        let candidates = response.json::<Vec<Candidate>>().await?;
        tracing::debug!(
            count = candidates.len(),
            ?month,
            status = status.as_str(),
            "fetched candidates"
        );
        Ok(candidates)
    }

    /// Fetch the full detail record for a single application.
    ///
    /// Sends a GET request to `/applications/{id}/details`.
    pub async fn fetch_application_details(
        &self,
        application_id: i64,
    ) -> Result<ApplicationDetails, ClientError> {
        let url = format!("{}/applications/{}/details", self.base_url, application_id);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;

        Ok(response.json::<ApplicationDetails>().await?)
    }

    /// Advance or reject an application's stage.
    ///
    /// Sends a POST request to `/applications/{id}/update-stage`. Advancing
    /// past the final stage flips the status to Accepted; rejecting flips it
    /// to Rejected. The backend echoes the updated application back.
    pub async fn update_stage(
        &self,
        application_id: i64,
        action: StageAction,
    ) -> Result<StageUpdateOutcome, ClientError> {
        let url = format!(
            "{}/applications/{}/update-stage",
            self.base_url, application_id
        );

        let body = serde_json::json!({ "action": action.as_wire() });

        let response = self.client.post(&url).json(&body).send().await?;
        let response = check_status(response).await?;

        let outcome = response.json::<StageUpdateOutcome>().await?;
        tracing::info!(
            application_id,
            action = action.as_wire(),
            status = outcome.status.as_str(),
            "stage updated"
        );
        Ok(outcome)
    }

    /// Fetch the months that have applications, for the month dropdown.
    ///
    /// Degrades gracefully instead of returning an error:
    /// 1. try the dedicated `/applications/available-months` endpoint;
    /// 2. on failure, fetch the full candidate list and derive unique
    ///    year/month pairs from the application dates;
    /// 3. on failure again, synthesize the current and previous three
    ///    calendar months from local time.
    pub async fn fetch_available_months(&self) -> Vec<MonthRef> {
        let url = format!("{}/applications/available-months", self.base_url);

        match self.get_months_endpoint(&url).await {
            Ok(months) => return months,
            Err(e) => {
                tracing::warn!(error = %e, "available-months endpoint failed, deriving from candidate list");
            }
        }

        match self.fetch_candidates(None, StatusFilter::All).await {
            Ok(candidates) => derive_months(&candidates),
            Err(e) => {
                tracing::warn!(error = %e, "candidate list fetch failed, synthesizing trailing months");
                trailing_months(Local::now().date_naive())
            }
        }
    }

    async fn get_months_endpoint(&self, url: &str) -> Result<Vec<MonthRef>, ClientError> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<MonthRef>>().await?)
    }
}

impl Default for PipelineClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a non-success response into `ClientError::ServerError`.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ClientError::ServerError { status, message })
}

/// Derive unique year/month pairs from a candidate list.
///
/// Order matches first occurrence in the input list; duplicates are dropped.
pub fn derive_months(candidates: &[Candidate]) -> Vec<MonthRef> {
    let mut seen = HashSet::new();
    let mut months = Vec::new();

    for candidate in candidates {
        let month = MonthRef::new(
            candidate.application_date.year(),
            candidate.application_date.month(),
        );
        if seen.insert(month) {
            months.push(month);
        }
    }

    months
}

/// The month containing `today` and the three months before it, newest first.
pub fn trailing_months(today: NaiveDate) -> Vec<MonthRef> {
    let mut months = Vec::with_capacity(4);
    let mut year = today.year();
    let mut month = today.month();

    for _ in 0..4 {
        months.push(MonthRef::new(year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }

    months
}
