use shared_types::{
    ActionResult, AppError, Appointment, BookingRequest, NewPatient, Patient,
    PatientAppointmentFilter, PatientBody,
};

use super::{redact, segment, ApiClient};

#[allow(async_fn_in_trait)]
pub trait PatientDirectory {
    /// The patient owning `token`, or `None` on any failure.
    async fn current(&self, token: &str) -> Option<Patient>;

    async fn appointments(
        &self,
        patient_id: i64,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError>;

    /// Appointments of the patient owning `token`, narrowed by condition
    /// and doctor name. The backend resolves the patient from the token.
    async fn filter_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError>;

    async fn book(&self, booking: &BookingRequest, token: &str) -> ActionResult;

    async fn sign_up(&self, patient: &NewPatient) -> ActionResult;
}

impl PatientDirectory for ApiClient {
    async fn current(&self, token: &str) -> Option<Patient> {
        let url = self.url(&["patient", "get", &segment(Some(token))]);
        let log_url = redact(&url, Some(token));
        tracing::debug!(url = %log_url, "Fetching patient");
        let body = match self.get_json(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %log_url, error = %e, "Patient fetch failed");
                return None;
            }
        };
        match serde_json::from_value::<PatientBody>(body) {
            Ok(body) => Some(body.into_patient()),
            Err(e) => {
                tracing::warn!(url = %log_url, error = %e, "Patient body did not decode");
                None
            }
        }
    }

    async fn appointments(
        &self,
        patient_id: i64,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        let id = patient_id.to_string();
        let url = self.url(&[
            "patient",
            "appointments",
            &id,
            &segment(Some(token)),
            "patient",
        ]);
        let log_url = redact(&url, Some(token));
        tracing::debug!(url = %log_url, "Listing patient appointments");
        let body = self.get_json(&url).await.map_err(|e| {
            tracing::warn!(url = %log_url, error = %e, "Patient appointments failed");
            e
        })?;
        Ok(Appointment::list_from_body(&body))
    }

    async fn filter_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, AppError> {
        let condition = segment(filter.condition.map(|c| c.as_str()));
        let name = segment(filter.doctor_name.as_deref());
        let url = self.url(&[
            "patient",
            "filterAppointments",
            &condition,
            &name,
            &segment(Some(token)),
        ]);
        let log_url = redact(&url, Some(token));
        tracing::debug!(url = %log_url, "Filtering patient appointments");
        let body = self.get_json(&url).await.map_err(|e| {
            tracing::warn!(url = %log_url, error = %e, "Patient appointment filter failed");
            e
        })?;
        Ok(Appointment::list_from_body(&body))
    }

    async fn book(&self, booking: &BookingRequest, token: &str) -> ActionResult {
        let url = self.url(&["appointments", "book", &segment(Some(token))]);
        let log_url = redact(&url, Some(token));
        tracing::info!(
            url = %log_url,
            doctor_id = booking.doctor.id,
            time = %booking.appointment_time,
            "Booking appointment"
        );
        let request = self.http().post(&url).json(booking);
        self.send_action(request, &log_url, "Appointment booked", "Failed to book appointment")
            .await
    }

    async fn sign_up(&self, patient: &NewPatient) -> ActionResult {
        let url = self.url(&["patient", "create"]);
        tracing::info!(url = %url, "Creating patient account");
        let request = self.http().post(&url).json(patient);
        self.send_action(request, &url, "Signup successful", "Failed to sign up")
            .await
    }
}
