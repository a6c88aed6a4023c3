use shared_types::{AppError, Appointment, AppointmentFilter};

use super::{redact, segment, ApiClient};

#[allow(async_fn_in_trait)]
pub trait AppointmentDirectory {
    /// Appointments on `filter.date`, optionally narrowed by patient name.
    ///
    /// Unlike the doctor listing, failures are returned so the caller can
    /// show an error row.
    async fn list(
        &self,
        filter: &AppointmentFilter,
        token: Option<&str>,
    ) -> Result<Vec<Appointment>, AppError>;
}

impl AppointmentDirectory for ApiClient {
    async fn list(
        &self,
        filter: &AppointmentFilter,
        token: Option<&str>,
    ) -> Result<Vec<Appointment>, AppError> {
        let date = segment(Some(filter.date.as_str()));
        let name = segment(filter.patient_name.as_deref());
        let token_seg = segment(token);
        let url = self.url(&["appointments", &date, &name, &token_seg]);
        let log_url = redact(&url, token);
        tracing::debug!(url = %log_url, "Listing appointments");

        match self.get_json(&url).await {
            Ok(body) => Ok(Appointment::list_from_body(&body)),
            Err(e) => {
                tracing::warn!(url = %log_url, error = %e, "Appointment listing failed");
                Err(e)
            }
        }
    }
}
