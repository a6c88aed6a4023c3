use std::future::Future;

use shared_types::{AppointmentFilter, Session};

use crate::directory::AppointmentDirectory;
use crate::generation::RequestGeneration;
use crate::paths;
use crate::render::{render_appointment_row, AppointmentRowView};

pub const NO_APPOINTMENTS: &str = "No Appointments found for the selected date.";
pub const APPOINTMENTS_ERROR: &str = "Error loading appointments. Try again later.";

/// Today's date (UTC) as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Contents of the patient table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentTable {
    Rows(Vec<AppointmentRowView>),
    /// A single informational row.
    Empty(&'static str),
    /// A single error row.
    Error(&'static str),
}

/// Doctor dashboard: appointments for one date, optionally narrowed by
/// patient name.
#[derive(Debug, Clone)]
pub struct DoctorDashboard<A> {
    directory: A,
    generation: RequestGeneration,
    selected_date: String,
    patient_name: Option<String>,
    token: Option<String>,
}

impl<A: AppointmentDirectory + Clone + 'static> DoctorDashboard<A> {
    /// The token comes from the session, or failing that from the last
    /// segment of `path` (`/doctorDashboard/{token}`).
    pub fn new(directory: A, session: &Session, path: &str) -> Self {
        let token = session
            .token()
            .map(str::to_string)
            .or_else(|| paths::token_from_path(path));
        Self {
            directory,
            generation: RequestGeneration::new(),
            selected_date: today(),
            patient_name: None,
            token,
        }
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Search-bar input. Blank input removes the name constraint.
    pub fn search(&mut self, input: &str) -> impl Future<Output = Option<AppointmentTable>> + 'static {
        let trimmed = input.trim();
        self.patient_name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.reload()
    }

    pub fn pick_date(&mut self, date: &str) -> impl Future<Output = Option<AppointmentTable>> + 'static {
        self.selected_date = date.to_string();
        self.reload()
    }

    /// The "Today" button.
    pub fn today(&mut self) -> impl Future<Output = Option<AppointmentTable>> + 'static {
        self.selected_date = today();
        self.reload()
    }

    /// Fetch for the current `(date, name, token)`. Resolves to `None` when
    /// a newer reload was issued before this one finished.
    pub fn reload(&self) -> impl Future<Output = Option<AppointmentTable>> + 'static {
        let directory = self.directory.clone();
        let generation = self.generation.clone();
        let ticket = generation.issue();
        let filter = AppointmentFilter::new(self.selected_date.clone(), self.patient_name.clone());
        let token = self.token.clone();
        async move {
            let result = directory.list(&filter, token.as_deref()).await;
            if !generation.is_current(ticket) {
                tracing::debug!(date = %filter.date, "Dropping stale appointment list");
                return None;
            }
            Some(match result {
                Ok(appointments) if appointments.is_empty() => {
                    AppointmentTable::Empty(NO_APPOINTMENTS)
                }
                Ok(appointments) => AppointmentTable::Rows(
                    appointments
                        .iter()
                        .map(|a| {
                            render_appointment_row(
                                &a.patient,
                                a.id.as_deref(),
                                a.doctor_id.as_deref(),
                            )
                        })
                        .collect(),
                ),
                Err(e) => {
                    tracing::error!(error = %e, "Error loading appointments");
                    AppointmentTable::Error(APPOINTMENTS_ERROR)
                }
            })
        }
    }
}
