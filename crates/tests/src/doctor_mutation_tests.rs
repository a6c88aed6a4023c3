use axum::http::{Method, StatusCode};
use client::card::{confirm_delete, DeleteOutcome};
use client::dashboard::{AddDoctorOutcome, AdminDashboard};
use client::DoctorDirectory;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{NewDoctor, Role, Session};

use crate::common::{self, Stub};

fn new_doctor() -> NewDoctor {
    NewDoctor {
        name: " Dr. Lee ".into(),
        specialty: "Dentist".into(),
        email: "lee@hospital.test".into(),
        password: "secret".into(),
        phone: "5550001111".into(),
        available_times: vec!["09:00-10:00".into(), "14:00-15:00".into()],
    }
}

#[tokio::test]
async fn create_posts_camel_case_body_to_token_path() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/doctor/adm-tok",
        StatusCode::CREATED,
        json!({ "message": "Doctor added to db" }),
    )])
    .await;

    let result = backend.client().create(&new_doctor(), "adm-tok").await;
    assert!(result.success);
    assert_eq!(result.message, "Doctor added to db");

    let requests = backend.requests();
    assert_eq!(requests[0].method, Method::POST);
    let body = requests[0].body.clone().expect("json body");
    assert_eq!(body["availableTimes"], json!(["09:00-10:00", "14:00-15:00"]));
    assert_eq!(body["specialty"], "Dentist");
}

#[tokio::test]
async fn create_falls_back_to_generic_messages() {
    let saved = common::spawn_backend(vec![Stub::post("/doctor/t", StatusCode::OK, Value::Null)]).await;
    let result = saved.client().create(&new_doctor(), "t").await;
    assert!(result.success);
    assert_eq!(result.message, "Saved");

    let rejected =
        common::spawn_backend(vec![Stub::post("/doctor/t", StatusCode::CONFLICT, json!({}))]).await;
    let result = rejected.client().create(&new_doctor(), "t").await;
    assert!(!result.success);
    assert_eq!(result.message, "Failed to save");
}

#[tokio::test]
async fn delete_hits_id_and_token_path() {
    let backend = common::spawn_backend(vec![Stub::delete(
        "/doctor/5/adm-tok",
        StatusCode::OK,
        json!({ "message": "Doctor deleted" }),
    )])
    .await;

    let session = Session::new(Role::Admin, Some("adm-tok".into()));
    let outcome = confirm_delete(5, &session, &backend.client()).await;
    assert_eq!(
        outcome,
        DeleteOutcome::Removed {
            doctor_id: 5,
            message: "Doctor deleted".into()
        }
    );
    assert_eq!(backend.requests()[0].method, Method::DELETE);
}

#[tokio::test]
async fn rejected_delete_keeps_card() {
    let backend = common::spawn_backend(vec![Stub::delete(
        "/doctor/5/adm-tok",
        StatusCode::FORBIDDEN,
        json!({ "error": "Not allowed" }),
    )])
    .await;

    let session = Session::new(Role::Admin, Some("adm-tok".into()));
    let outcome = confirm_delete(5, &session, &backend.client()).await;
    assert_eq!(
        outcome,
        DeleteOutcome::Failed {
            message: "Failed to delete doctor: Not allowed".into()
        }
    );
}

#[tokio::test]
async fn delete_without_token_sends_nothing() {
    let backend = common::spawn_backend(vec![]).await;
    let outcome = confirm_delete(5, &Session::new(Role::Admin, None), &backend.client()).await;
    assert_eq!(outcome, DeleteOutcome::MissingToken);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn add_doctor_trims_fields_and_reports_server_message() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/doctor/adm-tok",
        StatusCode::OK,
        json!({ "message": "Doctor added to db" }),
    )])
    .await;
    let dashboard = AdminDashboard::new(backend.client());
    let session = Session::new(Role::Admin, Some("adm-tok".into()));

    let outcome = dashboard.add_doctor(new_doctor(), &session).await;
    assert_eq!(
        outcome,
        AddDoctorOutcome::Added {
            message: "Doctor added to db".into()
        }
    );
    let body = backend.requests()[0].body.clone().expect("json body");
    assert_eq!(body["name"], "Dr. Lee");
}

#[tokio::test]
async fn add_doctor_requires_token() {
    let backend = common::spawn_backend(vec![]).await;
    let dashboard = AdminDashboard::new(backend.client());

    let outcome = dashboard
        .add_doctor(new_doctor(), &Session::new(Role::Admin, None))
        .await;
    assert_eq!(outcome, AddDoctorOutcome::NotLoggedIn);
    assert!(backend.requests().is_empty());
}
