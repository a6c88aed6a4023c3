use shared_types::{LoginRole, Role};

/// Dialogs the modal host can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    PatientSignup,
    AddDoctor,
}

impl ModalKind {
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::AdminLogin => "Admin Login",
            ModalKind::DoctorLogin => "Doctor Login",
            ModalKind::PatientLogin => "Patient Login",
            ModalKind::PatientSignup => "Patient Sign Up",
            ModalKind::AddDoctor => "Add Doctor",
        }
    }

    /// The login endpoint behind a login modal.
    pub fn login_role(&self) -> Option<LoginRole> {
        match self {
            ModalKind::AdminLogin => Some(LoginRole::Admin),
            ModalKind::DoctorLogin => Some(LoginRole::Doctor),
            ModalKind::PatientLogin => Some(LoginRole::Patient),
            ModalKind::PatientSignup | ModalKind::AddDoctor => None,
        }
    }
}

/// Session role stored after a successful login.
pub fn role_after_login(role: LoginRole) -> Role {
    match role {
        LoginRole::Admin => Role::Admin,
        LoginRole::Doctor => Role::Doctor,
        LoginRole::Patient => Role::LoggedPatient,
    }
}
