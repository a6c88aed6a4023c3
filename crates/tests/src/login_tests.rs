use axum::http::StatusCode;
use client::login::sign_in;
use client::{AuthDirectory, MemorySessionStore, SessionStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Credentials, LoginRole, Role};

use crate::common::{self, Stub};

fn credentials(identifier: &str) -> Credentials {
    Credentials {
        identifier: identifier.into(),
        password: "secret".into(),
    }
}

#[tokio::test]
async fn admin_logs_in_by_username() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/admin/login",
        StatusCode::OK,
        json!({ "token": "adm-tok" }),
    )])
    .await;
    let store = MemorySessionStore::new();

    let landing = sign_in(&backend.client(), &store, LoginRole::Admin, &credentials("admin"))
        .await
        .unwrap();
    assert_eq!(landing, "/adminDashboard/adm-tok");
    assert_eq!(store.role(), Role::Admin);
    assert_eq!(store.token().as_deref(), Some("adm-tok"));
    assert_eq!(
        backend.requests()[0].body,
        Some(json!({ "username": "admin", "password": "secret" }))
    );
}

#[tokio::test]
async fn doctor_and_patient_log_in_by_email() {
    let backend = common::spawn_backend(vec![
        Stub::post("/doctor/login", StatusCode::OK, json!({ "token": "doc-tok" })),
        Stub::post("/patient/login", StatusCode::OK, json!({ "token": "pat-tok" })),
    ])
    .await;
    let store = MemorySessionStore::new();

    let landing = sign_in(&backend.client(), &store, LoginRole::Doctor, &credentials("house@h.test"))
        .await
        .unwrap();
    assert_eq!(landing, "/doctorDashboard/doc-tok");
    assert_eq!(store.role(), Role::Doctor);

    let landing = sign_in(&backend.client(), &store, LoginRole::Patient, &credentials("ana@p.test"))
        .await
        .unwrap();
    assert_eq!(landing, "/loggedPatientDashboard");
    assert_eq!(store.role(), Role::LoggedPatient);
    assert_eq!(backend.requests()[1].body.clone().unwrap()["email"], "ana@p.test");
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/doctor/login",
        StatusCode::UNAUTHORIZED,
        json!({ "error": "Invalid credentials" }),
    )])
    .await;

    let err = backend
        .client()
        .login(LoginRole::Doctor, &credentials("house@h.test"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn empty_token_is_a_decode_error() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/patient/login",
        StatusCode::OK,
        json!({ "token": "" }),
    )])
    .await;

    let err = backend
        .client()
        .login(LoginRole::Patient, &credentials("ana@p.test"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}
