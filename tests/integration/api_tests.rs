//! API integration tests

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Stay dates relative to the current day, as the form would pick them
fn stay_dates(nights: i64) -> (String, String) {
    let check_in = Utc::now().date_naive();
    let check_out = check_in + Duration::days(nights);
    (check_in.to_string(), check_out.to_string())
}

/// Helper to put the reservation draft
async fn put_draft(client: &Client, draft: &Value) -> Value {
    let response = client
        .put(format!("{}/reservations/draft", BASE_URL))
        .json(draft)
        .send()
        .await
        .expect("Failed to send draft update");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse form state")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_room_catalog() {
    let client = Client::new();

    let response = client
        .get(format!("{}/rooms", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let rooms: Value = response.json().await.expect("Failed to parse response");
    let rooms = rooms.as_array().expect("Expected a room list");
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0]["id"], "standard");
    assert_eq!(rooms[0]["nightly_price"], 100);
    assert_eq!(rooms[1]["id"], "deluxe");
    assert_eq!(rooms[1]["nightly_price"], 150);
    assert_eq!(rooms[2]["id"], "suite");
    assert_eq!(rooms[2]["label"], "Suite");
    assert_eq!(rooms[2]["nightly_price"], 250);
}

#[tokio::test]
#[ignore]
async fn test_room_type_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/rooms/penthouse", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_booking_round_trip() {
    let client = Client::new();
    let (check_in, check_out) = stay_dates(3);

    put_draft(
        &client,
        &json!({
            "guest_name": "Asha Mehta",
            "email": "asha@example.com",
            "check_in": check_in,
            "check_out": check_out,
            "room_type": "deluxe"
        }),
    )
    .await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .send()
        .await
        .expect("Failed to send submission");

    assert_eq!(response.status(), 201);

    let summary: Value = response.json().await.expect("Failed to parse summary");
    assert_eq!(summary["guest_name"], "Asha Mehta");
    assert_eq!(summary["room_label"], "Deluxe Room");
    assert_eq!(summary["nights"], 3);
    assert_eq!(summary["total_price"], 450);

    // the stored form now carries the confirmed summary
    let form: Value = client
        .get(format!("{}/reservations", BASE_URL))
        .send()
        .await
        .expect("Failed to fetch form")
        .json()
        .await
        .expect("Failed to parse form state");
    assert_eq!(form["summary"]["total_price"], 450);

    // make another booking: summary cleared, draft back to empty
    let response = client
        .post(format!("{}/reservations/reset", BASE_URL))
        .send()
        .await
        .expect("Failed to send reset");

    assert!(response.status().is_success());

    let form: Value = response.json().await.expect("Failed to parse form state");
    assert!(form["summary"].is_null());
    assert_eq!(form["draft"]["guest_name"], "");
    assert!(form["draft"]["check_in"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_submission_reports_every_field_error() {
    let client = Client::new();
    let (check_in, _) = stay_dates(0);

    put_draft(
        &client,
        &json!({
            "guest_name": "",
            "email": "not-an-email",
            "check_in": check_in,
            "check_out": check_in,
            "room_type": "penthouse"
        }),
    )
    .await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .send()
        .await
        .expect("Failed to send submission");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse error body");
    let fields = &body["fields"];
    assert_eq!(fields["guest_name"][0]["kind"], "required_field");
    assert_eq!(fields["guest_name"][0]["message"], "Name is required");
    assert_eq!(fields["email"][0]["kind"], "invalid_format");
    assert_eq!(fields["check_out"][0]["kind"], "invalid_date_range");
    assert_eq!(fields["room_type"][0]["kind"], "required_field");
}

#[tokio::test]
#[ignore]
async fn test_preview_matches_submitted_total() {
    let client = Client::new();
    let (check_in, check_out) = stay_dates(1);

    let quote: Value = client
        .post(format!("{}/reservations/preview", BASE_URL))
        .json(&json!({
            "check_in": check_in,
            "check_out": check_out,
            "room_type": "suite"
        }))
        .send()
        .await
        .expect("Failed to send preview")
        .json()
        .await
        .expect("Failed to parse quote");

    assert_eq!(quote["nights"], 1);
    assert_eq!(quote["total_price"], 250);

    put_draft(
        &client,
        &json!({
            "guest_name": "Asha Mehta",
            "email": "asha@example.com",
            "check_in": check_in,
            "check_out": check_out,
            "room_type": "suite"
        }),
    )
    .await;

    let summary: Value = client
        .post(format!("{}/reservations", BASE_URL))
        .send()
        .await
        .expect("Failed to send submission")
        .json()
        .await
        .expect("Failed to parse summary");

    assert_eq!(summary["total_price"], quote["total_price"]);
    assert_eq!(summary["nights"], quote["nights"]);
}

#[tokio::test]
#[ignore]
async fn test_calendar_rules() {
    let client = Client::new();
    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);
    let tomorrow = today + Duration::days(1);

    let rule: Value = client
        .get(format!(
            "{}/reservations/calendar?field=check_in&date={}",
            BASE_URL, yesterday
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse rule");
    assert_eq!(rule["disabled"], true);

    let rule: Value = client
        .get(format!(
            "{}/reservations/calendar?field=check_in&date={}",
            BASE_URL, today
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse rule");
    assert_eq!(rule["disabled"], false);

    // with a chosen check-in, the same day is not a valid check-out
    let rule: Value = client
        .get(format!(
            "{}/reservations/calendar?field=check_out&date={}&check_in={}",
            BASE_URL, tomorrow, tomorrow
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse rule");
    assert_eq!(rule["disabled"], true);
}

#[tokio::test]
#[ignore]
async fn test_holds_filtering() {
    let client = Client::new();

    let holds: Value = client
        .get(format!("{}/holds?status=in_transit", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse holds");

    let holds = holds.as_array().expect("Expected a hold list");
    assert_eq!(holds.len(), 1);
    assert_eq!(holds[0]["patron"], "Anita Singh");
    assert_eq!(holds[0]["needs_attention"], true);
}

#[tokio::test]
#[ignore]
async fn test_holds_overview() {
    let client = Client::new();

    let overview: Value = client
        .get(format!("{}/holds/overview", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse overview");

    assert_eq!(overview["stats"]["total"], 124);
    assert_eq!(overview["stats"]["available"], 21);
    assert_eq!(overview["stats"]["in_transit"], 15);
    assert_eq!(overview["stats"]["expired"], 6);
    assert_eq!(overview["branches"][0]["label"], "Main Library");
    assert_eq!(overview["branches"][0]["holds"], 45);
}

#[tokio::test]
#[ignore]
async fn test_collection_analysis() {
    let client = Client::new();

    let analysis: Value = client
        .get(format!("{}/collections/analysis", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse analysis");

    assert_eq!(analysis["summary"]["collection_value"], 4567890);
    assert_eq!(analysis["summary"]["space_utilization_percent"], 78);

    let categories = analysis["categories"]
        .as_array()
        .expect("Expected category rows");
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["name"], "Computer Science");
    assert_eq!(categories[0]["total_items"], 2847);
}

#[tokio::test]
#[ignore]
async fn test_inventory_overview() {
    let client = Client::new();

    let overview: Value = client
        .get(format!("{}/inventory/overview", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse overview");

    assert_eq!(overview["stats"]["total_items"], 125847);
    assert_eq!(overview["stats"]["missing"], 458);
    assert!(overview["generated_at"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_missing_items_overview() {
    let client = Client::new();

    let overview: Value = client
        .get(format!("{}/missing-items/overview", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse overview");

    assert_eq!(overview["total_missing"], 4);
    assert_eq!(overview["searching"], 1);
    assert_eq!(overview["replacements_ordered"], 1);
    assert_eq!(overview["total_value"], 20400);
}
