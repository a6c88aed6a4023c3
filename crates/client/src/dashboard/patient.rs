use shared_types::{
    ActionResult, Appointment, BookingRequest, Doctor, NewPatient, Patient,
    PatientAppointmentFilter, Session,
};

use crate::card::PATIENT_FETCH_FAILED;
use crate::directory::PatientDirectory;

pub const NO_PATIENT_APPOINTMENTS: &str = "No appointments found.";
pub const PATIENT_APPOINTMENTS_ERROR: &str = "Error loading appointments. Try again later.";
pub const PICK_DATE_AND_SLOT: &str = "Please select a date and time slot.";
pub const SIGNUP_FIELDS_REQUIRED: &str = "Name, email and password are required.";

/// The logged-in patient's own appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientAppointments {
    Rows(Vec<Appointment>),
    Empty(&'static str),
    Error(&'static str),
    /// No token, or the token no longer resolves to a patient.
    SignedOut(&'static str),
}

/// List the session patient's appointments. Without a filter the patient is
/// resolved first and listed by id; with one, the backend resolves the
/// patient from the token.
pub async fn load_patient_appointments<P: PatientDirectory>(
    session: &Session,
    filter: &PatientAppointmentFilter,
    patients: &P,
) -> PatientAppointments {
    let Some(token) = session.token() else {
        return PatientAppointments::SignedOut(PATIENT_FETCH_FAILED);
    };
    let listed = if filter.is_unconstrained() {
        let Some(patient) = patients.current(token).await else {
            return PatientAppointments::SignedOut(PATIENT_FETCH_FAILED);
        };
        patients.appointments(patient.id, token).await
    } else {
        patients.filter_appointments(filter, token).await
    };
    match listed {
        Ok(list) if list.is_empty() => PatientAppointments::Empty(NO_PATIENT_APPOINTMENTS),
        Ok(list) => PatientAppointments::Rows(list),
        Err(e) => {
            tracing::error!(error = %e, "Error loading patient appointments");
            PatientAppointments::Error(PATIENT_APPOINTMENTS_ERROR)
        }
    }
}

/// Submit the booking overlay. Date and slot must both be chosen.
pub async fn submit_booking<P: PatientDirectory>(
    doctor: &Doctor,
    patient: &Patient,
    date: &str,
    slot: &str,
    session: &Session,
    patients: &P,
) -> ActionResult {
    if date.trim().is_empty() || slot.trim().is_empty() {
        return ActionResult::failed(PICK_DATE_AND_SLOT);
    }
    let Some(token) = session.token() else {
        return ActionResult::failed(PATIENT_FETCH_FAILED);
    };
    let booking = BookingRequest::new(doctor.id, patient.id, date.trim(), slot);
    patients.book(&booking, token).await
}

/// Submit the sign-up form.
pub async fn sign_up<P: PatientDirectory>(patient: NewPatient, patients: &P) -> ActionResult {
    let patient = NewPatient {
        name: patient.name.trim().to_string(),
        email: patient.email.trim().to_string(),
        phone: patient.phone.trim().to_string(),
        address: patient.address.trim().to_string(),
        password: patient.password,
    };
    if patient.name.is_empty() || patient.email.is_empty() || patient.password.is_empty() {
        return ActionResult::failed(SIGNUP_FIELDS_REQUIRED);
    }
    patients.sign_up(&patient).await
}
