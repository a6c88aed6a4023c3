use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::common::null_as_default;

/// A doctor record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "slots_skipping_nulls")]
    pub available_times: Vec<String>,
}

/// `null` entries (and a `null` list) in `availableTimes` carry no slot.
fn slots_skipping_nulls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let slots = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(slots.into_iter().flatten().flatten().collect())
}

impl Doctor {
    /// Name shown on cards; blank names render as "Unknown Doctor".
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown Doctor"
        } else {
            &self.name
        }
    }
}

/// Payload for `POST /doctor/{token}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub available_times: Vec<String>,
}

/// Raw doctor records in a list response: a bare array or
/// `{"doctors": [...]}`. Any other shape has no records. Callers decode
/// each record separately.
pub fn doctor_records(body: &Value) -> &[Value] {
    match body {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("doctors")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

/// Specialties offered in the add-doctor form and the specialty filter.
pub const SPECIALTIES: &[&str] = &[
    "Cardiologist",
    "Dermatologist",
    "Neurologist",
    "Pediatrician",
    "Orthopedic",
    "Gynecologist",
    "Psychiatrist",
    "Dentist",
    "Ophthalmologist",
    "ENT",
    "Urologist",
    "Oncologist",
    "Gastroenterologist",
    "General",
];

/// Availability slots offered in the add-doctor form and the time filter.
pub const TIME_SLOTS: &[&str] = &[
    "09:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "14:00-15:00",
    "15:00-16:00",
    "16:00-17:00",
];
