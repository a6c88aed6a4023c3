//! Page paths shared by the header and the router.

pub const ROOT: &str = "/";
pub const DOCTOR_DASHBOARD: &str = "/doctorDashboard";
pub const PATIENT_DASHBOARD: &str = "/patientDashboard";
pub const LOGGED_PATIENT_DASHBOARD: &str = "/loggedPatientDashboard";
pub const PATIENT_APPOINTMENTS: &str = "/patientAppointments";

pub fn admin_dashboard(token: &str) -> String {
    format!("/adminDashboard/{}", urlencoding::encode(token))
}

pub fn doctor_dashboard(token: &str) -> String {
    format!("{DOCTOR_DASHBOARD}/{}", urlencoding::encode(token))
}

/// Root is `/` or any path with a trailing slash.
pub fn is_root(path: &str) -> bool {
    path.is_empty() || path.ends_with('/')
}

/// Token carried as the last segment of a multi-segment path such as
/// `/doctorDashboard/{token}`.
pub fn token_from_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return None;
    }
    let last = segments[segments.len() - 1];
    let decoded = urlencoding::decode(last)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| last.to_string());
    Some(decoded).filter(|t| !t.is_empty())
}
