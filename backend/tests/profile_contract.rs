//! End-to-end contract coverage for the profile endpoint.
//!
//! Exercises the real route wiring with the fixture-backed state: header
//! parsing, shape routing, and the frozen field sets old clients depend
//! on.

use actix_web::{App, http::StatusCode, test, web};
use serde_json::Value;
use uuid::Uuid;

use backend::inbound::http::CLIENT_IDENTIFIER_HEADER;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::configure_api;

const USER_ID: Uuid = Uuid::from_u128(0xfeed);

async fn get(path: &str, header: Option<&str>) -> (StatusCode, Value) {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::fixture()))
            .app_data(health_state)
            .configure(configure_api),
    )
    .await;

    let mut request = test::TestRequest::get().uri(path);
    if let Some(value) = header {
        request = request.insert_header((CLIENT_IDENTIFIER_HEADER, value));
    }
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = if status == StatusCode::OK {
        let bytes = test::read_body(response).await;
        if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is valid JSON")
        }
    } else {
        Value::Null
    };
    (status, body)
}

fn profile_path() -> String {
    format!("/api/v1/users/{USER_ID}/profile")
}

fn sorted_keys(body: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = body
        .as_object()
        .expect("profile body is an object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[actix_web::test]
async fn health_probes_respond() {
    let (ready, _) = get("/health/ready", None).await;
    let (live, _) = get("/health/live", None).await;
    assert_eq!(ready, StatusCode::OK);
    assert_eq!(live, StatusCode::OK);
}

#[actix_web::test]
async fn v1_band_field_set_is_frozen() {
    let (status, body) = get(&profile_path(), Some("ios/app@1.2.0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        sorted_keys(&body),
        vec![
            "dateCreated",
            "email",
            "id",
            "isEmailConfirmed",
            "lastNewReplyAcknowledged",
            "lastNewReplySeen",
            "name",
            "receiveReplyDesktopNotifications",
            "receiveReplyEmailNotifications",
            "receiveSuggestedReadings",
            "receiveWebsiteUpdates",
            "role",
            "timeZoneDisplayName",
            "timeZoneName",
        ]
    );
    // The fixture's digest frequency is weekly, so the derived flag is on.
    assert_eq!(body["receiveSuggestedReadings"], Value::Bool(true));
}

#[actix_web::test]
async fn v2_band_field_set_is_frozen() {
    let (status, body) = get(&profile_path(), Some("ios/app@1.5.0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        sorted_keys(&body),
        vec![
            "dateCreated",
            "email",
            "id",
            "isEmailConfirmed",
            "name",
            "notificationPreference",
            "role",
            "timeZone",
        ]
    );
    assert_eq!(
        body["notificationPreference"]["digestFrequency"],
        Value::String("weekly".into())
    );
}

#[actix_web::test]
async fn current_band_exposes_the_evolving_contract() {
    let (status, body) = get(&profile_path(), Some("web/extension@1.2.0")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["notificationPreference"].get("lastReplySeen").is_some());
    assert!(body["timeZone"].get("id").is_some());
}

#[actix_web::test]
async fn missing_header_serves_the_v1_contract() {
    let (status, body) = get(&profile_path(), None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("receiveSuggestedReadings").is_some());
    assert!(body.get("notificationPreference").is_none());
}

#[actix_web::test]
async fn proxied_header_with_valid_suffix_still_identifies() {
    let (status, body) = get(&profile_path(), Some("gateway ios/app@1.5.0")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("notificationPreference").is_some());
}

#[actix_web::test]
async fn identical_requests_yield_identical_bodies() {
    let (_, first) = get(&profile_path(), Some("ios/app@1.2.0")).await;
    let (_, second) = get(&profile_path(), Some("ios/app@1.2.0")).await;
    assert_eq!(first, second);
}
