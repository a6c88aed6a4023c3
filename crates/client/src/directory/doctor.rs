use serde::Deserialize;
use serde_json::Value;
use shared_types::{doctor_records, ActionResult, Doctor, DoctorFilter, NewDoctor};

use super::{redact, segment, ApiClient};

/// Alert raised when a filter request never reached the server.
pub const FILTER_FAILED_ALERT: &str = "Something went wrong while filtering doctors";

/// Result of a filter request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DoctorQuery {
    pub doctors: Vec<Doctor>,
    /// Set only on transport failure; a non-success status stays silent.
    pub alert: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait DoctorDirectory {
    async fn list(&self) -> Vec<Doctor>;

    async fn filter(&self, filter: &DoctorFilter) -> DoctorQuery;

    async fn create(&self, doctor: &NewDoctor, token: &str) -> ActionResult;

    async fn delete(&self, doctor_id: i64, token: &str) -> ActionResult;
}

/// Decode each record on its own; bad records are skipped.
fn doctors_from(body: &Value) -> Vec<Doctor> {
    doctor_records(body)
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match Doctor::deserialize(record) {
            Ok(doctor) => Some(doctor),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping doctor record");
                None
            }
        })
        .collect()
}

impl DoctorDirectory for ApiClient {
    async fn list(&self) -> Vec<Doctor> {
        let url = self.url(&["doctor"]);
        tracing::debug!(url = %url, "Listing doctors");
        match self.get_json(&url).await {
            Ok(body) => doctors_from(&body),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Doctor listing failed");
                Vec::new()
            }
        }
    }

    async fn filter(&self, filter: &DoctorFilter) -> DoctorQuery {
        let name = segment(filter.name.as_deref());
        let time = segment(filter.time.as_deref());
        let specialty = segment(filter.specialty.as_deref());
        let url = self.url(&["doctor", "filter", &name, &time, &specialty]);
        tracing::debug!(url = %url, "Filtering doctors");

        let response = match self.http().get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Doctor filter request failed");
                return DoctorQuery {
                    doctors: Vec::new(),
                    alert: Some(FILTER_FAILED_ALERT.to_string()),
                };
            }
        };
        if !response.status().is_success() {
            tracing::warn!(url = %url, status = response.status().as_u16(), "Doctor filter rejected");
            return DoctorQuery::default();
        }
        let doctors = match response.json::<Value>().await {
            Ok(body) => doctors_from(&body),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Doctor filter body was not JSON");
                Vec::new()
            }
        };
        DoctorQuery {
            doctors,
            alert: None,
        }
    }

    async fn create(&self, doctor: &NewDoctor, token: &str) -> ActionResult {
        let url = self.url(&["doctor", &segment(Some(token))]);
        let log_url = redact(&url, Some(token));
        tracing::info!(url = %log_url, name = %doctor.name, "Creating doctor");
        let request = self.http().post(&url).json(doctor);
        self.send_action(request, &log_url, "Saved", "Failed to save")
            .await
    }

    async fn delete(&self, doctor_id: i64, token: &str) -> ActionResult {
        let id = doctor_id.to_string();
        let url = self.url(&["doctor", &id, &segment(Some(token))]);
        let log_url = redact(&url, Some(token));
        tracing::info!(url = %log_url, doctor_id, "Deleting doctor");
        let request = self.http().delete(&url);
        self.send_action(request, &log_url, "Deleted", "Failed to delete")
            .await
    }
}
