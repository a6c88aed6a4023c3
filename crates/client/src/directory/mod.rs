//! REST clients for the hospital backend.
//!
//! One [`ApiClient`] implements every directory trait. Each operation is
//! fail-soft: transport errors, bad statuses and undecodable bodies are turned
//! into values before they leave this module.

mod appointment;
mod auth;
mod doctor;
mod patient;

pub use appointment::AppointmentDirectory;
pub use auth::AuthDirectory;
pub use doctor::{DoctorDirectory, DoctorQuery, FILTER_FAILED_ALERT};
pub use patient::PatientDirectory;

use serde_json::Value;
use shared_types::{ActionResult, AppError, MessageBody};

use crate::config::portal_config;

/// Path segment sent in place of an absent filter value or token.
pub const NULL_SEGMENT: &str = "null";

/// Encode an optional path segment: absent or blank values become `null`.
pub fn segment(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => urlencoding::encode(v).into_owned(),
        None => NULL_SEGMENT.to_string(),
    }
}

/// Replace the encoded token inside a URL so it can be logged.
pub fn redact(url: &str, token: Option<&str>) -> String {
    match token.filter(|t| !t.is_empty()) {
        Some(token) => url.replace(urlencoding::encode(token).as_ref(), "<token>"),
        None => url.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Client pointed at the configured backend.
    pub fn from_config() -> Self {
        Self::new(portal_config().base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join already-encoded path segments onto the base URL.
    pub(crate) fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for seg in segments {
            url.push('/');
            url.push_str(seg);
        }
        url
    }

    /// GET a JSON document. Non-success statuses become [`AppError`]s.
    pub(crate) async fn get_json(&self, url: &str) -> Result<Value, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        read_json(response).await
    }

    /// POST a JSON body and decode the JSON reply.
    pub(crate) async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        read_json(response).await
    }

    /// Send a mutating request and fold the reply into an [`ActionResult`].
    ///
    /// `success` follows the HTTP status; the message is the server's when it
    /// sent one, otherwise `ok_fallback` / `err_fallback`.
    pub(crate) async fn send_action(
        &self,
        request: reqwest::RequestBuilder,
        log_url: &str,
        ok_fallback: &str,
        err_fallback: &str,
    ) -> ActionResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %log_url, error = %e, "Request failed");
                return ActionResult::network_error();
            }
        };
        let success = response.status().is_success();
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let server_message = serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.text());
        if success {
            tracing::debug!(url = %log_url, status, "Action succeeded");
            ActionResult::ok(server_message.unwrap_or_else(|| ok_fallback.to_string()))
        } else {
            tracing::warn!(url = %log_url, status, "Action rejected");
            ActionResult::failed(server_message.unwrap_or_else(|| err_fallback.to_string()))
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::from_status(status.as_u16(), &body));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::decode(e.to_string()))
}
