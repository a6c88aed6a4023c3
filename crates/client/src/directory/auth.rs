use serde_json::{Map, Value};
use shared_types::{AppError, Credentials, LoginRole, TokenBody};

use super::ApiClient;

#[allow(async_fn_in_trait)]
pub trait AuthDirectory {
    /// Exchange credentials for a token.
    async fn login(&self, role: LoginRole, credentials: &Credentials) -> Result<String, AppError>;
}

/// Login body: `{username|email, password}` depending on the role.
pub(crate) fn login_body(role: LoginRole, credentials: &Credentials) -> Value {
    let mut body = Map::new();
    body.insert(
        role.identifier_field().to_string(),
        Value::String(credentials.identifier.trim().to_string()),
    );
    body.insert(
        "password".to_string(),
        Value::String(credentials.password.clone()),
    );
    Value::Object(body)
}

impl AuthDirectory for ApiClient {
    async fn login(&self, role: LoginRole, credentials: &Credentials) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url(), role.path());
        tracing::info!(url = %url, role = role.label(), "Logging in");
        let body = self
            .post_json(&url, &login_body(role, credentials))
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Login failed");
                e
            })?;
        let token = serde_json::from_value::<TokenBody>(body)
            .map_err(|e| AppError::decode(e.to_string()))?
            .token;
        if token.is_empty() {
            return Err(AppError::decode("Login response carried an empty token"));
        }
        Ok(token)
    }
}
