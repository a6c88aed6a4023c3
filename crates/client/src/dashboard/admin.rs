use std::future::Future;

use shared_types::{NewDoctor, Session};

use super::doctor_board::DoctorBoard;
use crate::directory::DoctorDirectory;

pub const ADMIN_LOGIN_REQUIRED: &str = "You must be logged in as admin to add a doctor.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDoctorOutcome {
    /// Close the modal and reload the page.
    Added { message: String },
    /// Keep the modal open and show the message.
    Failed { message: String },
    /// No request was sent.
    NotLoggedIn,
}

impl AddDoctorOutcome {
    pub fn message(&self) -> &str {
        match self {
            AddDoctorOutcome::Added { message } | AddDoctorOutcome::Failed { message } => message,
            AddDoctorOutcome::NotLoggedIn => ADMIN_LOGIN_REQUIRED,
        }
    }
}

/// Trim the free-text fields of the add-doctor form.
pub fn normalize_new_doctor(mut doctor: NewDoctor) -> NewDoctor {
    doctor.name = doctor.name.trim().to_string();
    doctor.email = doctor.email.trim().to_string();
    doctor.phone = doctor.phone.trim().to_string();
    doctor
}

/// Admin dashboard: the doctor board plus doctor creation.
#[derive(Debug, Clone)]
pub struct AdminDashboard<D> {
    board: DoctorBoard<D>,
}

impl<D: DoctorDirectory + Clone + 'static> AdminDashboard<D> {
    pub fn new(directory: D) -> Self {
        Self {
            board: DoctorBoard::new(directory),
        }
    }

    pub fn board(&self) -> &DoctorBoard<D> {
        &self.board
    }

    /// Submit the add-doctor form. The token check happens before any
    /// request is built.
    pub fn add_doctor(
        &self,
        doctor: NewDoctor,
        session: &Session,
    ) -> impl Future<Output = AddDoctorOutcome> + 'static {
        let directory = self.board.directory().clone();
        let token = session.token().map(str::to_string);
        async move {
            let Some(token) = token else {
                tracing::warn!("Add doctor attempted without an admin token");
                return AddDoctorOutcome::NotLoggedIn;
            };
            let doctor = normalize_new_doctor(doctor);
            let result = directory.create(&doctor, &token).await;
            if result.success {
                AddDoctorOutcome::Added {
                    message: result.message,
                }
            } else {
                AddDoctorOutcome::Failed {
                    message: result.message,
                }
            }
        }
    }
}
