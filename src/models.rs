//! Wire types for the HireTrack backend API.
//!
//! These mirror the JSON shapes the backend serves. Dates arrive as
//! ISO `YYYY-MM-DD` strings and deserialize into [`chrono::NaiveDate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stage position of an application within its role's ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageInfo {
    /// Stage id the application currently sits in
    pub current_stage: i64,
    pub stage_name: String,
    pub stage_sequence: i32,
}

/// One row of the dashboard table: a candidate's application summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub application_id: i64,
    pub candidate_name: String,
    pub role_name: String,
    pub rating: f32,
    pub application_date: NaiveDate,
    /// Number of attached documents
    pub attachments: i32,
    pub status: ApplicationStatus,
    /// None when the application has not entered the stage ladder yet
    pub stage: Option<StageInfo>,
}

/// A candidate's prior work experience, shown on the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub experience_id: i64,
    pub company_name: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

/// One rung of a role's stage ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleStage {
    pub stage_id: i64,
    pub stage_name: String,
    pub stage_sequence: i32,
}

/// Full detail record for a single application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub application_id: i64,
    pub candidate_id: i64,
    pub candidate_name: String,
    pub role_id: i64,
    pub role_name: String,
    pub current_stage_id: i64,
    pub current_stage_name: String,
    pub current_stage_sequence: i32,
    pub status: ApplicationStatus,
    pub application_date: NaiveDate,
    pub experiences: Vec<Experience>,
    /// All stages of the role, ordered by sequence
    pub role_stages: Vec<RoleStage>,
}

/// A `{year, month}` pair offered in the month filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Human-readable label, e.g. "January 2024".
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Lifecycle status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// Status filter applied to the dashboard list.
///
/// Serialized into the `status_filter` field of the by-month request,
/// where "All" means no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Accepted,
    Rejected,
}

impl StatusFilter {
    /// All filters in tab order.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Accepted,
        StatusFilter::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Accepted => "Accepted",
            StatusFilter::Rejected => "Rejected",
        }
    }

    /// True when a candidate's status passes this filter.
    pub fn matches(&self, status: ApplicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ApplicationStatus::Pending,
            StatusFilter::Accepted => status == ApplicationStatus::Accepted,
            StatusFilter::Rejected => status == ApplicationStatus::Rejected,
        }
    }
}

/// Action applied to an application's stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    /// Move to the next stage; on the last stage, the backend accepts
    Advance,
    Reject,
}

impl StageAction {
    /// Wire string expected by the update-stage endpoint.
    pub fn as_wire(&self) -> &'static str {
        match self {
            StageAction::Advance => "next",
            StageAction::Reject => "reject",
        }
    }
}

/// Result of an update-stage call, echoed back by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StageUpdateOutcome {
    pub application_id: i64,
    pub status: ApplicationStatus,
    /// Stage id after the update
    #[serde(default)]
    pub current_stage: Option<i64>,
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
