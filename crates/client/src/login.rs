use shared_types::{AppError, Credentials, LoginRole};

use crate::directory::AuthDirectory;
use crate::modal::role_after_login;
use crate::paths;
use crate::session::SessionStore;

pub const CREDENTIALS_REQUIRED: &str = "Please enter your credentials.";

/// Dashboard a freshly logged-in role lands on.
pub fn landing_path(role: LoginRole, token: &str) -> String {
    match role {
        LoginRole::Admin => paths::admin_dashboard(token),
        LoginRole::Doctor => paths::doctor_dashboard(token),
        LoginRole::Patient => paths::LOGGED_PATIENT_DASHBOARD.to_string(),
    }
}

/// Log in, store `(role, token)`, and return the path to navigate to.
pub async fn sign_in<A, S>(
    auth: &A,
    store: &S,
    role: LoginRole,
    credentials: &Credentials,
) -> Result<String, AppError>
where
    A: AuthDirectory,
    S: SessionStore + ?Sized,
{
    if credentials.identifier.trim().is_empty() || credentials.password.is_empty() {
        return Err(AppError::missing_precondition(CREDENTIALS_REQUIRED));
    }
    let token = auth.login(role, credentials).await?;
    store.set_session(role_after_login(role), Some(token.clone()));
    tracing::info!(role = role.label(), "Logged in");
    Ok(landing_path(role, &token))
}
