//! View models for doctor cards and appointment rows.
//!
//! The Dioxus components draw exactly what these structs describe, so every
//! role decision lives here and can be tested without a DOM.

use shared_types::{Doctor, PatientSummary, Role, Session};

/// Tag shown when a doctor has no availability.
pub const NO_TIMES_PLACEHOLDER: &str = "No available times";

/// What the "Book Now" button does for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAffordance {
    /// Tell the user to log in and open the patient login modal.
    PromptLogin,
    /// Fetch the patient record, then open the booking overlay.
    Book,
    /// Rendered but disabled; no handler.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardActions {
    pub delete: bool,
    pub booking: BookingAffordance,
}

/// Card actions for a session. One match over every role.
pub fn card_actions(session: &Session) -> CardActions {
    let has_token = session.has_token();
    match session.role {
        Role::Admin => CardActions {
            delete: true,
            booking: BookingAffordance::Disabled,
        },
        Role::Anonymous => CardActions {
            delete: false,
            booking: BookingAffordance::PromptLogin,
        },
        Role::Patient if has_token => CardActions {
            delete: false,
            booking: BookingAffordance::Disabled,
        },
        Role::Patient => CardActions {
            delete: false,
            booking: BookingAffordance::PromptLogin,
        },
        Role::LoggedPatient if has_token => CardActions {
            delete: false,
            booking: BookingAffordance::Book,
        },
        Role::LoggedPatient => CardActions {
            delete: false,
            booking: BookingAffordance::PromptLogin,
        },
        Role::Doctor => CardActions {
            delete: false,
            booking: BookingAffordance::Disabled,
        },
    }
}

/// One availability tag on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeTag {
    Slot(String),
    Placeholder,
}

impl TimeTag {
    pub fn label(&self) -> &str {
        match self {
            TimeTag::Slot(slot) => slot,
            TimeTag::Placeholder => NO_TIMES_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCardView {
    pub doctor_id: i64,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub times: Vec<TimeTag>,
    pub actions: CardActions,
}

pub fn render_doctor_card(doctor: &Doctor, session: &Session) -> DoctorCardView {
    let times = if doctor.available_times.is_empty() {
        vec![TimeTag::Placeholder]
    } else {
        doctor
            .available_times
            .iter()
            .cloned()
            .map(TimeTag::Slot)
            .collect()
    };
    DoctorCardView {
        doctor_id: doctor.id,
        name: doctor.display_name().to_string(),
        specialty: doctor.specialty.clone(),
        email: doctor.email.clone(),
        times,
        actions: card_actions(session),
    }
}

/// Link from an appointment row to the prescription form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionLink {
    pub appointment_id: Option<String>,
    pub patient_name: String,
}

impl PrescriptionLink {
    /// The prescription page is served by the backend.
    pub fn href(&self, base_url: &str) -> String {
        format!(
            "{}/pages/addPrescription.html?appointmentId={}&patientName={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(self.appointment_id.as_deref().unwrap_or("")),
            urlencoding::encode(&self.patient_name),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRowView {
    pub patient_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub doctor_id: Option<String>,
    pub prescription: PrescriptionLink,
}

pub fn render_appointment_row(
    patient: &PatientSummary,
    appointment_id: Option<&str>,
    doctor_id: Option<&str>,
) -> AppointmentRowView {
    AppointmentRowView {
        patient_id: patient.id.clone(),
        name: patient.name.clone(),
        phone: patient.phone.clone(),
        email: patient.email.clone(),
        doctor_id: doctor_id.map(str::to_string),
        prescription: PrescriptionLink {
            appointment_id: appointment_id.map(str::to_string),
            patient_name: patient.name.clone(),
        },
    }
}
