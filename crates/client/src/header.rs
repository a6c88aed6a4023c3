//! Header state machine.
//!
//! The header is derived from `(path, role, token)` on every render. Root
//! paths and expired sessions both clear the stored session.

use shared_types::{Role, Session};

use crate::modal::ModalKind;
use crate::paths;
use crate::session::SessionStore;

pub const SESSION_EXPIRED: &str = "Session expired or invalid login. Please log in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Root,
    Anonymous,
    Patient,
    LoggedPatient,
    Doctor,
    Admin,
}

impl From<Role> for HeaderState {
    fn from(role: Role) -> Self {
        match role {
            Role::Anonymous => HeaderState::Anonymous,
            Role::Patient => HeaderState::Patient,
            Role::LoggedPatient => HeaderState::LoggedPatient,
            Role::Doctor => HeaderState::Doctor,
            Role::Admin => HeaderState::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    AddDoctor,
    Logout,
    DoctorHome,
    Login,
    SignUp,
    PatientHome,
    Appointments,
    PatientLogout,
    SelectRole,
}

/// What activating a header action asks the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEffect {
    OpenModal(ModalKind),
    Navigate(String),
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::AddDoctor => "Add Doctor",
            HeaderAction::Logout | HeaderAction::PatientLogout => "Logout",
            HeaderAction::DoctorHome | HeaderAction::PatientHome => "Home",
            HeaderAction::Login => "Login",
            HeaderAction::SignUp => "Sign Up",
            HeaderAction::Appointments => "Appointments",
            HeaderAction::SelectRole => "Select Role",
        }
    }

    /// Run the action. Logouts clear the session before navigating.
    pub fn activate<S: SessionStore + ?Sized>(&self, store: &S) -> HeaderEffect {
        match self {
            HeaderAction::AddDoctor => HeaderEffect::OpenModal(ModalKind::AddDoctor),
            HeaderAction::Login => HeaderEffect::OpenModal(ModalKind::PatientLogin),
            HeaderAction::SignUp => HeaderEffect::OpenModal(ModalKind::PatientSignup),
            HeaderAction::DoctorHome => navigate(paths::DOCTOR_DASHBOARD),
            HeaderAction::PatientHome => navigate(paths::LOGGED_PATIENT_DASHBOARD),
            HeaderAction::Appointments => navigate(paths::PATIENT_APPOINTMENTS),
            HeaderAction::SelectRole => navigate(paths::ROOT),
            HeaderAction::Logout => {
                store.clear_session();
                navigate(paths::ROOT)
            }
            HeaderAction::PatientLogout => {
                store.clear_session();
                navigate(paths::PATIENT_DASHBOARD)
            }
        }
    }
}

fn navigate(path: &str) -> HeaderEffect {
    HeaderEffect::Navigate(path.to_string())
}

pub fn actions_for(state: HeaderState) -> Vec<HeaderAction> {
    match state {
        HeaderState::Root => Vec::new(),
        HeaderState::Admin => vec![HeaderAction::AddDoctor, HeaderAction::Logout],
        HeaderState::Doctor => vec![HeaderAction::DoctorHome, HeaderAction::Logout],
        HeaderState::Patient => vec![HeaderAction::Login, HeaderAction::SignUp],
        HeaderState::LoggedPatient => vec![
            HeaderAction::PatientHome,
            HeaderAction::Appointments,
            HeaderAction::PatientLogout,
        ],
        HeaderState::Anonymous => vec![HeaderAction::SelectRole],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    /// Logo only.
    Minimal,
    /// The stored login is unusable; notify and go back to root.
    Expired {
        message: &'static str,
        redirect: &'static str,
    },
    Nav {
        state: HeaderState,
        actions: Vec<HeaderAction>,
    },
}

impl HeaderView {
    /// Whether deriving this view requires wiping the stored session.
    pub fn clears_session(&self) -> bool {
        matches!(self, HeaderView::Minimal | HeaderView::Expired { .. })
    }
}

/// Derive the header without touching storage.
pub fn header_view(path: &str, session: &Session) -> HeaderView {
    if paths::is_root(path) {
        return HeaderView::Minimal;
    }
    if session.is_expired() {
        return HeaderView::Expired {
            message: SESSION_EXPIRED,
            redirect: paths::ROOT,
        };
    }
    let state = HeaderState::from(session.role);
    HeaderView::Nav {
        state,
        actions: actions_for(state),
    }
}

/// Derive the header and apply its session side effects.
pub fn compose_header<S: SessionStore + ?Sized>(path: &str, store: &S) -> HeaderView {
    let session = store.snapshot();
    let view = header_view(path, &session);
    if view.clears_session() && session != Session::default() {
        if matches!(view, HeaderView::Expired { .. }) {
            tracing::info!(role = ?session.role, "Stored session has no token; clearing");
        }
        store.clear_session();
    }
    view
}
