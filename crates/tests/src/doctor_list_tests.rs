use client::dashboard::{DoctorBoard, DoctorListing, NO_DOCTORS};
use client::{ApiClient, DoctorDirectory};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{self, Stub};

#[tokio::test]
async fn list_reads_wrapped_doctor_array() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/doctor",
        json!({ "doctors": [
            common::doctor_json(1, "Gregory House", "Neurologist", &["09:00-10:00"]),
            common::doctor_json(2, "Meredith Grey", "General", &[]),
        ]}),
    )])
    .await;

    let doctors = backend.client().list().await;
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].name, "Gregory House");
    assert_eq!(doctors[0].available_times, vec!["09:00-10:00".to_string()]);
    assert_eq!(backend.paths(), vec!["/doctor".to_string()]);
}

#[tokio::test]
async fn list_accepts_bare_array() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/doctor",
        json!([common::doctor_json(3, "Lisa Cuddy", "Dentist", &[])]),
    )])
    .await;

    let doctors = backend.client().list().await;
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].id, 3);
}

#[tokio::test]
async fn malformed_record_does_not_hide_the_rest() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/doctor",
        json!({ "doctors": [
            { "id": 1, "name": "A", "availableTimes": ["09:00-10:00"] },
            { "id": 2, "name": "B", "availableTimes": ["10:00-11:00", null] },
            { "name": "No Id", "availableTimes": [] },
        ]}),
    )])
    .await;

    let doctors = backend.client().list().await;
    let ids: Vec<i64> = doctors.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(doctors[1].available_times, vec!["10:00-11:00".to_string()]);
}

#[tokio::test]
async fn list_failure_is_silently_empty() {
    let backend = common::spawn_backend(vec![Stub::get("/doctor", json!({"error": "boom"}))
        .with_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR)])
    .await;
    assert!(backend.client().list().await.is_empty());

    let offline = ApiClient::new(common::unreachable_base_url().await);
    assert!(offline.list().await.is_empty());
}

#[tokio::test]
async fn board_load_shows_no_doctors_message_when_empty() {
    let backend = common::spawn_backend(vec![Stub::get("/doctor", json!({ "doctors": [] }))]).await;
    let board = DoctorBoard::new(backend.client());

    let update = board.load().await.expect("only request in flight");
    assert_eq!(update.listing, DoctorListing::Empty(NO_DOCTORS));
    assert_eq!(update.alert, None);
}

#[tokio::test]
async fn board_load_renders_cards() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/doctor",
        json!({ "doctors": [common::doctor_json(1, "Gregory House", "Neurologist", &[])] }),
    )])
    .await;
    let board = DoctorBoard::new(backend.client());

    match board.load().await.expect("only request in flight").listing {
        DoctorListing::Cards(doctors) => assert_eq!(doctors[0].id, 1),
        other => panic!("expected cards, got {other:?}"),
    }
}
