//! Route-level tests for the moderation REST surface.
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server_core::kernel::ServerDeps;
use server_core::server::build_app;
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> (Router, ServerDeps) {
    let deps = ServerDeps::in_memory(crate::common::DASHBOARD_BASE);
    (build_app(deps.clone()), deps)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn registration_body() -> Value {
    json!({
        "requester_id": Uuid::new_v4(),
        "requester_name": "Park Jiho",
        "requester_type": "business",
        "payload": {
            "kind": "partner_registration",
            "company_name": "Seoul Realty Co",
            "contact_email": "owner@seoulrealty.com",
            "contact_phone": "02-555-0100",
            "business_type": "real_estate"
        }
    })
}

fn listing_body() -> Value {
    json!({
        "requester_id": Uuid::new_v4(),
        "requester_name": "Kim Minji",
        "requester_type": "individual",
        "payload": {
            "kind": "real_estate_listing",
            "title": "Gangnam 2-room",
            "address": "12 Teheran-ro, Gangnam-gu",
            "price_krw": 450000000i64,
            "floor_area_sqm": 59.5,
            "description": null
        }
    })
}

fn reviewer_fields() -> Value {
    json!({
        "reviewer_id": Uuid::new_v4(),
        "reviewer_name": "admin",
    })
}

async fn submit(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/moderation/items", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

// =============================================================================
// Submit + list
// =============================================================================

#[tokio::test]
async fn submitted_items_show_up_in_the_queue() {
    let (app, _deps) = app();
    let item = submit(&app, listing_body()).await;
    assert_eq!(item["status"], "pending_approval");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/moderation/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["id"], item["id"]);
}

#[tokio::test]
async fn list_rejects_unknown_status_values() {
    let (app, _deps) = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/moderation/items?status=bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Approve
// =============================================================================

#[tokio::test]
async fn approving_a_registration_returns_the_one_time_credentials() {
    let (app, _deps) = app();
    let item = submit(&app, registration_body()).await;
    let id = item["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/moderation/items/{id}/approve"),
            reviewer_fields(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["item"]["status"], "approved");
    assert_eq!(body["provisioning"]["status"], "provisioned");

    let account = &body["provisioning"]["account"];
    assert_eq!(account["email"], "owner@seoulrealty.com");
    assert_eq!(
        account["dashboard_url"],
        format!("{}/dashboard/realty", crate::common::DASHBOARD_BASE)
    );
    assert!(!account["temp_password"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn approving_twice_is_a_conflict() {
    let (app, _deps) = app();
    let item = submit(&app, listing_body()).await;
    let id = item["id"].as_str().unwrap();
    let uri = format!("/api/moderation/items/{id}/approve");

    let first = app
        .clone()
        .oneshot(json_request("POST", &uri, reviewer_fields()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(json_request("POST", &uri, reviewer_fields()))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = response_json(second).await;
    assert_eq!(body["error"]["code"], "INVALID_STATE");
}

#[tokio::test]
async fn approving_an_unknown_item_is_404() {
    let (app, _deps) = app();
    let uri = format!("/api/moderation/items/{}/approve", Uuid::new_v4());

    let response = app
        .clone()
        .oneshot(json_request("POST", &uri, reviewer_fields()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Reject
// =============================================================================

#[tokio::test]
async fn rejecting_with_a_short_reason_is_unprocessable() {
    let (app, _deps) = app();
    let item = submit(&app, listing_body()).await;
    let id = item["id"].as_str().unwrap();

    let mut body = reviewer_fields();
    body["rejection_reason"] = json!("too short");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/moderation/items/{id}/reject"),
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = response_json(response).await;
    assert_eq!(error["error"]["code"], "REASON_TOO_SHORT");

    // Still pending in the queue
    let queue = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/moderation/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let queue = response_json(queue).await;
    assert_eq!(queue["total"], 1);
}

#[tokio::test]
async fn rejecting_with_a_valid_reason_returns_the_updated_item() {
    let (app, _deps) = app();
    let item = submit(&app, listing_body()).await;
    let id = item["id"].as_str().unwrap();

    let mut body = reviewer_fields();
    body["rejection_reason"] = json!("Missing required floor plan documents");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/moderation/items/{id}/reject"),
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let rejected = response_json(response).await;
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(
        rejected["rejection_reason"],
        "Missing required floor plan documents"
    );
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_queue_depth() {
    let (app, _deps) = app();
    submit(&app, listing_body()).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["pending_items"], 1);
}
