use axum::http::StatusCode;
use client::dashboard::{
    load_patient_appointments, sign_up, submit_booking, PatientAppointments, NO_PATIENT_APPOINTMENTS,
    PATIENT_APPOINTMENTS_ERROR, PICK_DATE_AND_SLOT,
};
use client::PatientDirectory;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Doctor, NewPatient, PatientAppointmentFilter, Role, Session};

use crate::common::{self, Stub};

fn doctor() -> Doctor {
    serde_json::from_value(common::doctor_json(2, "Lisa Cuddy", "Dentist", &["09:00-10:00"]))
        .expect("fixture decodes")
}

fn logged_in() -> Session {
    Session::new(Role::LoggedPatient, Some("pat-tok".into()))
}

#[tokio::test]
async fn current_patient_accepts_bare_and_wrapped_bodies() {
    let backend = common::spawn_backend(vec![
        Stub::get("/patient/get/bare", common::patient_json(9, "Ana Ruiz")),
        Stub::get(
            "/patient/get/wrapped",
            json!({ "patient": common::patient_json(10, "Bo Chen") }),
        ),
    ])
    .await;
    let client = backend.client();

    assert_eq!(client.current("bare").await.map(|p| p.id), Some(9));
    assert_eq!(client.current("wrapped").await.map(|p| p.name), Some("Bo Chen".into()));
    assert_eq!(client.current("missing").await, None);
}

#[tokio::test]
async fn booking_posts_slot_start_as_appointment_time() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/appointments/book/pat-tok",
        StatusCode::OK,
        serde_json::Value::Null,
    )])
    .await;
    let patient = serde_json::from_value(common::patient_json(9, "Ana Ruiz")).unwrap();

    let result = submit_booking(
        &doctor(),
        &patient,
        "2026-10-20",
        "09:00-10:00",
        &logged_in(),
        &backend.client(),
    )
    .await;
    assert!(result.success);
    assert_eq!(result.message, "Appointment booked");

    let body = backend.requests()[0].body.clone().expect("json body");
    assert_eq!(
        body,
        json!({
            "doctor": { "id": 2 },
            "patient": { "id": 9 },
            "appointmentTime": "2026-10-20T09:00:00",
            "status": 0,
        })
    );
}

#[tokio::test]
async fn booking_requires_date_and_slot() {
    let backend = common::spawn_backend(vec![]).await;
    let patient = serde_json::from_value(common::patient_json(9, "Ana Ruiz")).unwrap();

    let result = submit_booking(&doctor(), &patient, "", "09:00-10:00", &logged_in(), &backend.client()).await;
    assert!(!result.success);
    assert_eq!(result.message, PICK_DATE_AND_SLOT);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn rejected_booking_uses_server_error() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/appointments/book/pat-tok",
        StatusCode::CONFLICT,
        json!({ "error": "Slot already taken" }),
    )])
    .await;
    let patient = serde_json::from_value(common::patient_json(9, "Ana Ruiz")).unwrap();

    let result = submit_booking(&doctor(), &patient, "2026-10-20", "09:00-10:00", &logged_in(), &backend.client()).await;
    assert!(!result.success);
    assert_eq!(result.message, "Slot already taken");
}

#[tokio::test]
async fn sign_up_posts_trimmed_patient() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/patient/create",
        StatusCode::CREATED,
        serde_json::Value::Null,
    )])
    .await;

    let result = sign_up(
        NewPatient {
            name: " Ana Ruiz ".into(),
            email: "ana@patient.test ".into(),
            password: "pw".into(),
            phone: "555".into(),
            address: "1 Main St".into(),
        },
        &backend.client(),
    )
    .await;
    assert!(result.success);
    assert_eq!(result.message, "Signup successful");
    let body = backend.requests()[0].body.clone().expect("json body");
    assert_eq!(body["name"], "Ana Ruiz");
    assert_eq!(body["email"], "ana@patient.test");
}

#[tokio::test]
async fn sign_up_failure_falls_back_to_generic_message() {
    let backend = common::spawn_backend(vec![Stub::post(
        "/patient/create",
        StatusCode::BAD_REQUEST,
        json!({}),
    )])
    .await;

    let result = sign_up(
        NewPatient {
            name: "Ana".into(),
            email: "ana@patient.test".into(),
            password: "pw".into(),
            ..Default::default()
        },
        &backend.client(),
    )
    .await;
    assert!(!result.success);
    assert_eq!(result.message, "Failed to sign up");
}

#[tokio::test]
async fn own_appointments_load_through_patient_id() {
    let backend = common::spawn_backend(vec![
        Stub::get("/patient/get/pat-tok", common::patient_json(9, "Ana Ruiz")),
        Stub::get(
            "/patient/appointments/9/pat-tok/patient",
            json!([{ "id": 1, "doctorId": 2, "patient": 9, "appointmentTime": "2026-10-20T09:00:00" }]),
        ),
    ])
    .await;

    match load_patient_appointments(&logged_in(), &PatientAppointmentFilter::default(), &backend.client()).await {
        PatientAppointments::Rows(rows) => {
            assert_eq!(rows[0].doctor_id.as_deref(), Some("2"));
            assert_eq!(rows[0].date.as_deref(), Some("2026-10-20T09:00:00"));
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn own_appointments_need_a_token() {
    let backend = common::spawn_backend(vec![]).await;
    let outcome = load_patient_appointments(
        &Session::new(Role::Patient, None),
        &PatientAppointmentFilter::default(),
        &backend.client(),
    ).await;
    assert!(matches!(outcome, PatientAppointments::SignedOut(_)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn own_appointments_keep_doctor_name_and_patient_id() {
    let backend = common::spawn_backend(vec![
        Stub::get("/patient/get/pat-tok", common::patient_json(9, "Ana Ruiz")),
        Stub::get(
            "/patient/appointments/9/pat-tok/patient",
            json!([{
                "id": 5,
                "doctorId": 2,
                "doctorName": "Dr. Lee",
                "patientId": 9,
                "patientName": "Ana Ruiz",
                "patientEmail": "ana@patient.test",
                "appointmentTime": "2026-10-20T09:00:00",
                "status": 0,
            }]),
        ),
    ])
    .await;

    let outcome = load_patient_appointments(
        &logged_in(),
        &PatientAppointmentFilter::default(),
        &backend.client(),
    )
    .await;
    match outcome {
        PatientAppointments::Rows(rows) => {
            assert_eq!(rows[0].doctor_name.as_deref(), Some("Dr. Lee"));
            assert_eq!(rows[0].patient.id, "9");
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn filtered_appointments_send_condition_and_name_with_null_for_blanks() {
    let backend = common::spawn_backend(vec![
        Stub::get(
            "/patient/filterAppointments/past/null/pat-tok",
            json!([{ "id": 1, "doctorId": 2, "doctorName": "Dr. Lee", "patientId": 9 }]),
        ),
        Stub::get("/patient/filterAppointments/null/Lisa%20Cuddy/pat-tok", json!([])),
    ])
    .await;
    let client = backend.client();

    let past = client
        .filter_appointments(&PatientAppointmentFilter::from_inputs("past", ""), "pat-tok")
        .await
        .expect("filter succeeds");
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].doctor_name.as_deref(), Some("Dr. Lee"));

    let by_doctor = load_patient_appointments(
        &logged_in(),
        &PatientAppointmentFilter::from_inputs("", " Lisa Cuddy "),
        &client,
    )
    .await;
    assert_eq!(by_doctor, PatientAppointments::Empty(NO_PATIENT_APPOINTMENTS));

    assert_eq!(
        backend.paths(),
        vec![
            "/patient/filterAppointments/past/null/pat-tok".to_string(),
            "/patient/filterAppointments/null/Lisa%20Cuddy/pat-tok".to_string(),
        ]
    );
}

#[tokio::test]
async fn rejected_filter_shows_error_row() {
    let backend = common::spawn_backend(vec![Stub::get(
        "/patient/filterAppointments/future/null/bad-tok",
        json!({ "error": "Invalid token" }),
    )
    .with_status(StatusCode::UNAUTHORIZED)])
    .await;

    let outcome = load_patient_appointments(
        &Session::new(Role::LoggedPatient, Some("bad-tok".into())),
        &PatientAppointmentFilter::from_inputs("future", ""),
        &backend.client(),
    )
    .await;
    assert_eq!(outcome, PatientAppointments::Error(PATIENT_APPOINTMENTS_ERROR));
}
