use axum::http::StatusCode;
use client::dashboard::{today, AppointmentTable, DoctorDashboard, APPOINTMENTS_ERROR, NO_APPOINTMENTS};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Role, Session};

use crate::common::{self, Stub};

fn doctor_session() -> Session {
    Session::new(Role::Doctor, Some("doc-tok".into()))
}

#[tokio::test]
async fn initial_reload_uses_today_and_session_token() {
    let path = format!("/appointments/{}/null/doc-tok", today());
    let backend = common::spawn_backend(vec![Stub::get(
        &path,
        json!([{
            "id": 42,
            "doctor": { "id": 3 },
            "patient": { "id": 7, "name": "Ana Ruiz", "phone": "555", "email": "ana@x.io" },
        }]),
    )])
    .await;
    let dashboard = DoctorDashboard::new(backend.client(), &doctor_session(), "/doctorDashboard");

    match dashboard.reload().await.expect("only request in flight") {
        AppointmentTable::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].name, "Ana Ruiz");
            assert_eq!(
                rows[0].prescription.href(&backend.base_url),
                format!(
                    "{}/pages/addPrescription.html?appointmentId=42&patientName=Ana%20Ruiz",
                    backend.base_url
                )
            );
        }
        other => panic!("expected rows, got {other:?}"),
    }
    assert_eq!(backend.paths(), vec![path]);
}

#[tokio::test]
async fn token_falls_back_to_last_path_segment() {
    let backend = common::spawn_backend(vec![]).await;
    let dashboard = DoctorDashboard::new(
        backend.client(),
        &Session::default(),
        "/doctorDashboard/url-tok",
    );
    assert_eq!(dashboard.token(), Some("url-tok"));

    dashboard.reload().await;
    assert_eq!(
        backend.paths(),
        vec![format!("/appointments/{}/null/url-tok", today())]
    );
}

#[tokio::test]
async fn search_and_date_change_the_request() {
    let backend = common::spawn_backend(vec![]).await;
    let mut dashboard =
        DoctorDashboard::new(backend.client(), &doctor_session(), "/doctorDashboard");

    dashboard.pick_date("2026-01-02").await;
    dashboard.search("  Bo Chen ").await;
    dashboard.search("   ").await;
    dashboard.today().await;

    assert_eq!(
        backend.paths(),
        vec![
            "/appointments/2026-01-02/null/doc-tok".to_string(),
            "/appointments/2026-01-02/Bo%20Chen/doc-tok".to_string(),
            "/appointments/2026-01-02/null/doc-tok".to_string(),
            format!("/appointments/{}/null/doc-tok", today()),
        ]
    );
    assert_eq!(dashboard.patient_name(), None);
    assert_eq!(dashboard.selected_date(), today());
}

#[tokio::test]
async fn empty_and_failed_lists_become_single_rows() {
    let backend = common::spawn_backend(vec![
        Stub::get("/appointments/2026-01-01/null/doc-tok", json!({ "appointments": [] })),
        Stub::get("/appointments/2026-01-02/null/doc-tok", json!({}))
            .with_status(StatusCode::INTERNAL_SERVER_ERROR),
    ])
    .await;
    let mut dashboard =
        DoctorDashboard::new(backend.client(), &doctor_session(), "/doctorDashboard");

    assert_eq!(
        dashboard.pick_date("2026-01-01").await,
        Some(AppointmentTable::Empty(NO_APPOINTMENTS))
    );
    assert_eq!(
        dashboard.pick_date("2026-01-02").await,
        Some(AppointmentTable::Error(APPOINTMENTS_ERROR))
    );
}

#[tokio::test]
async fn superseded_reload_is_dropped() {
    let backend = common::spawn_backend(vec![
        Stub::get("/appointments/2026-01-01/null/doc-tok", json!([])).delayed(200),
        Stub::get("/appointments/2026-01-02/null/doc-tok", json!([])),
    ])
    .await;
    let mut dashboard =
        DoctorDashboard::new(backend.client(), &doctor_session(), "/doctorDashboard");

    let slow = dashboard.pick_date("2026-01-01");
    let fast = dashboard.pick_date("2026-01-02");
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow, None);
    assert_eq!(fast, Some(AppointmentTable::Empty(NO_APPOINTMENTS)));
}
