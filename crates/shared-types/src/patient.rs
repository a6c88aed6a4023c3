use serde::{Deserialize, Serialize};

use crate::common::null_as_default;

/// The logged-in patient's own record (`GET /patient/get/{token}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

/// Patient response: the record itself or `{"patient": {...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PatientBody {
    Wrapped { patient: Patient },
    Bare(Patient),
}

impl PatientBody {
    pub fn into_patient(self) -> Patient {
        match self {
            PatientBody::Wrapped { patient } => patient,
            PatientBody::Bare(patient) => patient,
        }
    }
}

/// Payload for `POST /patient/create` (sign up).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

/// Credentials for the login endpoints. Admins log in by username, doctors
/// and patients by email.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

/// Which login endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRole {
    Admin,
    Doctor,
    Patient,
}

impl LoginRole {
    pub fn path(&self) -> &'static str {
        match self {
            LoginRole::Admin => "admin/login",
            LoginRole::Doctor => "doctor/login",
            LoginRole::Patient => "patient/login",
        }
    }

    /// JSON key the backend expects the identifier under.
    pub fn identifier_field(&self) -> &'static str {
        match self {
            LoginRole::Admin => "username",
            LoginRole::Doctor | LoginRole::Patient => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginRole::Admin => "Admin",
            LoginRole::Doctor => "Doctor",
            LoginRole::Patient => "Patient",
        }
    }
}

/// Login response: `{"token": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenBody {
    pub token: String,
}
