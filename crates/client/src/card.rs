//! Handlers behind the doctor card buttons.

use shared_types::{Doctor, Patient, Session};

use crate::directory::{DoctorDirectory, PatientDirectory};
use crate::render::{card_actions, BookingAffordance};

pub const ADMIN_TOKEN_MISSING: &str = "Admin token missing. Please log in as admin.";
pub const PATIENT_FETCH_FAILED: &str = "Failed to retrieve patient details. Please log in again.";
pub const LOGIN_TO_BOOK: &str = "Please log in or sign up to book an appointment.";

/// Confirmation text shown before a delete is sent.
pub fn delete_prompt(doctor: &Doctor) -> String {
    format!(
        "Delete Dr. {}? This action cannot be undone.",
        doctor.display_name()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Drop the card with this id.
    Removed { doctor_id: i64, message: String },
    /// Keep the card and show the message.
    Failed { message: String },
    /// No request was sent.
    MissingToken,
}

impl DeleteOutcome {
    pub fn message(&self) -> &str {
        match self {
            DeleteOutcome::Removed { message, .. } | DeleteOutcome::Failed { message } => message,
            DeleteOutcome::MissingToken => ADMIN_TOKEN_MISSING,
        }
    }
}

/// Send a confirmed delete. Call only after the user accepted
/// [`delete_prompt`].
pub async fn confirm_delete<D: DoctorDirectory>(
    doctor_id: i64,
    session: &Session,
    directory: &D,
) -> DeleteOutcome {
    let Some(token) = session.token() else {
        tracing::warn!(doctor_id, "Delete attempted without an admin token");
        return DeleteOutcome::MissingToken;
    };
    let result = directory.delete(doctor_id, token).await;
    if result.success {
        DeleteOutcome::Removed {
            doctor_id,
            message: result.message,
        }
    } else {
        DeleteOutcome::Failed {
            message: format!("Failed to delete doctor: {}", result.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    OpenOverlay { doctor: Doctor, patient: Patient },
    /// The patient fetch failed; no overlay.
    Retry { message: String },
    /// Show the message and open the patient login modal.
    PromptLogin { message: String },
    /// The button is disabled for this session.
    Disabled,
}

/// Handle a "Book Now" press.
///
/// Only a logged-in patient with a token causes a request, and then exactly
/// one patient fetch.
pub async fn start_booking<P: PatientDirectory>(
    doctor: &Doctor,
    session: &Session,
    patients: &P,
) -> BookingOutcome {
    match card_actions(session).booking {
        BookingAffordance::Disabled => BookingOutcome::Disabled,
        BookingAffordance::PromptLogin => BookingOutcome::PromptLogin {
            message: LOGIN_TO_BOOK.to_string(),
        },
        BookingAffordance::Book => {
            let Some(token) = session.token() else {
                return BookingOutcome::PromptLogin {
                    message: LOGIN_TO_BOOK.to_string(),
                };
            };
            match patients.current(token).await {
                Some(patient) => BookingOutcome::OpenOverlay {
                    doctor: doctor.clone(),
                    patient,
                },
                None => BookingOutcome::Retry {
                    message: PATIENT_FETCH_FAILED.to_string(),
                },
            }
        }
    }
}
