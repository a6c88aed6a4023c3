use axum::http::StatusCode;
use client::AppointmentDirectory;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, AppointmentFilter};

use crate::common::{self, Stub};

#[tokio::test]
async fn date_name_and_token_form_the_path() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/appointments/2026-10-18/Ana%20Ruiz/doc-tok",
        json!([]),
    )])
    .await;

    let filter = AppointmentFilter::new("2026-10-18", Some(" Ana Ruiz ".into()));
    let list = backend.client().list(&filter, Some("doc-tok")).await.unwrap();
    assert!(list.is_empty());
    assert_eq!(
        backend.paths(),
        vec!["/appointments/2026-10-18/Ana%20Ruiz/doc-tok".to_string()]
    );
}

#[tokio::test]
async fn missing_name_and_token_become_null() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/appointments/2026-10-18/null/null",
        json!([]),
    )])
    .await;

    let filter = AppointmentFilter::new("2026-10-18", Some("   ".into()));
    backend.client().list(&filter, None).await.unwrap();
    assert_eq!(
        backend.paths(),
        vec!["/appointments/2026-10-18/null/null".to_string()]
    );
}

#[tokio::test]
async fn every_accepted_body_shape_is_normalized() {
    let record = json!({
        "id": 11,
        "doctor": { "id": 3 },
        "patient": { "id": 7, "name": "Ana Ruiz", "phone": "555", "email": "ana@x.io" },
        "appointmentTime": "2026-10-18T09:00:00",
    });
    let flat = json!({
        "appointmentId": "12",
        "doctorId": 3,
        "patient": 8,
        "patientName": "Bo Chen",
        "patientEmail": "bo@x.io",
    });
    let backend = common::spawn_backend(vec![
        Stub::get("/appointments/2026-10-18/null/a", json!([record.clone()])),
        Stub::get("/appointments/2026-10-18/null/b", json!({ "appointments": [flat] })),
        Stub::get("/appointments/2026-10-18/null/c", json!({ "data": [record] })),
        Stub::get("/appointments/2026-10-18/null/d", json!({ "unexpected": true })),
    ])
    .await;
    let client = backend.client();
    let filter = AppointmentFilter::new("2026-10-18", None);

    let a = client.list(&filter, Some("a")).await.unwrap();
    assert_eq!(a[0].id.as_deref(), Some("11"));
    assert_eq!(a[0].doctor_id.as_deref(), Some("3"));
    assert_eq!(a[0].patient.name, "Ana Ruiz");

    let b = client.list(&filter, Some("b")).await.unwrap();
    assert_eq!(b[0].id.as_deref(), Some("12"));
    assert_eq!(b[0].patient.id, "8");
    assert_eq!(b[0].patient.name, "Bo Chen");
    assert_eq!(b[0].patient.phone, "");

    let c = client.list(&filter, Some("c")).await.unwrap();
    assert_eq!(c.len(), 1);

    let d = client.list(&filter, Some("d")).await.unwrap();
    assert!(d.is_empty());
}

#[tokio::test]
async fn server_error_is_surfaced() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/appointments/2026-10-18/null/tok",
        json!({ "message": "db down" }),
    )
    .with_status(StatusCode::INTERNAL_SERVER_ERROR)])
    .await;

    let err = backend
        .client()
        .list(&AppointmentFilter::new("2026-10-18", None), Some("tok"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Status);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "db down");
}
