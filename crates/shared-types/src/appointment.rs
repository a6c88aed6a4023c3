use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::scalar_text;

/// Patient columns shown in an appointment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// An appointment as listed for a doctor or a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Option<String>,
    pub doctor_id: Option<String>,
    pub doctor_name: Option<String>,
    pub patient: PatientSummary,
    pub date: Option<String>,
}

impl Appointment {
    /// Normalize one wire record.
    ///
    /// The backend is loose about shape: `patient` is an object or a bare id
    /// (with `patientName`/`patientPhone`/`patientEmail` alongside) or absent
    /// with a flat `patientId`. The id arrives as `id` or `appointmentId`,
    /// and the doctor as a `doctor` object or `doctorId`/`doctorName`.
    pub fn from_wire(record: &Value) -> Self {
        let patient = match record.get("patient") {
            Some(obj @ Value::Object(_)) => PatientSummary {
                id: obj.get("id").and_then(scalar_text).unwrap_or_else(|| "N/A".into()),
                name: text_field(obj, "name").unwrap_or_else(|| "Unknown".into()),
                phone: text_field(obj, "phone").unwrap_or_default(),
                email: text_field(obj, "email").unwrap_or_default(),
            },
            other => PatientSummary {
                id: other
                    .and_then(scalar_text)
                    .or_else(|| record.get("patientId").and_then(scalar_text))
                    .unwrap_or_else(|| "N/A".into()),
                name: text_field(record, "patientName").unwrap_or_else(|| "Unknown".into()),
                phone: text_field(record, "patientPhone").unwrap_or_default(),
                email: text_field(record, "patientEmail").unwrap_or_default(),
            },
        };

        let id = record
            .get("id")
            .and_then(scalar_text)
            .or_else(|| record.get("appointmentId").and_then(scalar_text));

        let doctor = record.get("doctor").filter(|d| d.is_object());
        let doctor_id = doctor
            .and_then(|d| d.get("id"))
            .and_then(scalar_text)
            .or_else(|| record.get("doctorId").and_then(scalar_text));
        let doctor_name = doctor
            .and_then(|d| text_field(d, "name"))
            .or_else(|| text_field(record, "doctorName"));

        let date = text_field(record, "appointmentTime").or_else(|| text_field(record, "date"));

        Self {
            id,
            doctor_id,
            doctor_name,
            patient,
            date,
        }
    }

    /// Extract and normalize the appointment list from any accepted body:
    /// a bare array, `{"appointments": [...]}`, or `{"data": [...]}`.
    /// Any other shape yields an empty list.
    pub fn list_from_body(body: &Value) -> Vec<Self> {
        let items = match body {
            Value::Array(items) => Some(items),
            Value::Object(map) => map
                .get("appointments")
                .and_then(Value::as_array)
                .or_else(|| map.get("data").and_then(Value::as_array)),
            _ => None,
        };
        items
            .map(|items| items.iter().map(Self::from_wire).collect())
            .unwrap_or_default()
    }
}

fn text_field(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Payload for `POST /appointments/book/{token}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor: IdRef,
    pub patient: IdRef,
    /// ISO local datetime, e.g. `2026-10-18T09:00:00`.
    pub appointment_time: String,
    pub status: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdRef {
    pub id: i64,
}

impl BookingRequest {
    /// Book `slot` (e.g. `09:00-10:00`) on `date` (`YYYY-MM-DD`). The start
    /// of the slot becomes the appointment time.
    pub fn new(doctor_id: i64, patient_id: i64, date: &str, slot: &str) -> Self {
        let start = slot.split('-').next().unwrap_or(slot).trim();
        Self {
            doctor: IdRef { id: doctor_id },
            patient: IdRef { id: patient_id },
            appointment_time: format!("{date}T{start}:00"),
            status: 0,
        }
    }
}
