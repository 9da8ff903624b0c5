//! Pipeline API endpoint tests using wiremock.
//!
//! These tests verify that the PipelineClient calls the backend endpoints
//! with the expected methods, paths, and bodies, and that error statuses
//! propagate as `ClientError::ServerError`.

use hiretrack::client::{ClientError, PipelineClient};
use hiretrack::models::{ApplicationStatus, MonthRef, StageAction, StatusFilter};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn candidate_json(id: i64, name: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "application_id": id,
        "candidate_name": name,
        "role_name": "Backend Engineer",
        "rating": 4.0,
        "application_date": date,
        "attachments": 1,
        "status": "Pending",
        "stage": {
            "current_stage": 3,
            "stage_name": "Phone Screen",
            "stage_sequence": 2
        }
    })
}

#[tokio::test]
async fn test_fetch_candidates_sends_month_and_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applications/by-month/detailed"))
        .and(body_json(serde_json::json!({
            "year": 2024,
            "month": 1,
            "status_filter": "Pending"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            candidate_json(1, "Ada Lovelace", "2024-01-15"),
        ])))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let candidates = client
        .fetch_candidates(Some(MonthRef::new(2024, 1)), StatusFilter::Pending)
        .await
        .unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].candidate_name, "Ada Lovelace");
    assert_eq!(candidates[0].status, ApplicationStatus::Pending);
}

#[tokio::test]
async fn test_fetch_candidates_without_month_sends_nulls() {
    let mock_server = MockServer::start().await;

    // No month filter: year and month are null, status "All".
    Mock::given(method("POST"))
        .and(path("/applications/by-month/detailed"))
        .and(body_json(serde_json::json!({
            "year": null,
            "month": null,
            "status_filter": "All"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let candidates = client
        .fetch_candidates(None, StatusFilter::All)
        .await
        .unwrap();

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_fetch_application_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applications/7/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "application_id": 7,
            "candidate_id": 3,
            "candidate_name": "Grace Hopper",
            "role_id": 2,
            "role_name": "Compiler Engineer",
            "current_stage_id": 11,
            "current_stage_name": "Onsite",
            "current_stage_sequence": 3,
            "status": "Pending",
            "application_date": "2024-02-01",
            "experiences": [
                {
                    "experience_id": 1,
                    "company_name": "Navy",
                    "position": "Programmer",
                    "start_date": "1949-05-01",
                    "end_date": "1966-12-31",
                    "description": "Compilers"
                }
            ],
            "role_stages": [
                {"stage_id": 9, "stage_name": "Screen", "stage_sequence": 1},
                {"stage_id": 10, "stage_name": "Phone", "stage_sequence": 2},
                {"stage_id": 11, "stage_name": "Onsite", "stage_sequence": 3}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let details = client.fetch_application_details(7).await.unwrap();

    assert_eq!(details.candidate_name, "Grace Hopper");
    assert_eq!(details.experiences.len(), 1);
    assert_eq!(details.role_stages.len(), 3);
    assert_eq!(details.current_stage_sequence, 3);
}

#[tokio::test]
async fn test_fetch_application_details_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/applications/999/details"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Application with ID 999 not found"
        })))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let result = client.fetch_application_details(999).await;

    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("999"));
        }
        other => panic!("Expected ServerError with status 404, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_update_stage_advance_sends_next() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applications/5/update-stage"))
        .and(body_json(serde_json::json!({"action": "next"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "application_id": 5,
            "status": "Pending",
            "current_stage": 12
        })))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let outcome = client.update_stage(5, StageAction::Advance).await.unwrap();

    assert_eq!(outcome.application_id, 5);
    assert_eq!(outcome.current_stage, Some(12));
}

#[tokio::test]
async fn test_update_stage_reject_sends_reject() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applications/5/update-stage"))
        .and(body_json(serde_json::json!({"action": "reject"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "application_id": 5,
            "status": "Rejected"
        })))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let outcome = client.update_stage(5, StageAction::Reject).await.unwrap();

    assert_eq!(outcome.status, ApplicationStatus::Rejected);
    assert_eq!(outcome.current_stage, None);
}

#[tokio::test]
async fn test_update_stage_server_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applications/5/update-stage"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "Internal server error"
        })))
        .mount(&mock_server)
        .await;

    let client = PipelineClient::with_base_url(mock_server.uri());
    let result = client.update_stage(5, StageAction::Advance).await;

    match result {
        Err(ClientError::ServerError { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected ServerError with status 500, got {:?}", other.err()),
    }
}
