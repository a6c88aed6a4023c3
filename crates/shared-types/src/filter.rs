use serde::{Deserialize, Serialize};

/// Doctor list filter. `None` means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    /// Build from raw input values. Blank inputs become `None`; the name is
    /// trimmed, select values are taken as-is.
    pub fn from_inputs(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: non_blank(name.trim()),
            time: non_blank(time),
            specialty: non_blank(specialty),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }
}

/// Appointment list filter for the doctor dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFilter {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub patient_name: Option<String>,
}

impl AppointmentFilter {
    pub fn new(date: impl Into<String>, patient_name: Option<String>) -> Self {
        Self {
            date: date.into(),
            patient_name: patient_name.and_then(|n| non_blank(n.trim())),
        }
    }
}

/// Past or upcoming, as the patient appointment filter names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentCondition {
    Past,
    Future,
}

impl AppointmentCondition {
    pub const ALL: [AppointmentCondition; 2] =
        [AppointmentCondition::Past, AppointmentCondition::Future];

    /// Path segment value.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentCondition::Past => "past",
            AppointmentCondition::Future => "future",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentCondition::Past => "Past Appointments",
            AppointmentCondition::Future => "Upcoming Appointments",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// The logged-in patient's appointment filter. `None` means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientAppointmentFilter {
    pub condition: Option<AppointmentCondition>,
    pub doctor_name: Option<String>,
}

impl PatientAppointmentFilter {
    /// Build from the condition select and the doctor search box. Unknown
    /// condition values count as no constraint.
    pub fn from_inputs(condition: &str, doctor_name: &str) -> Self {
        Self {
            condition: AppointmentCondition::parse(condition.trim()),
            doctor_name: non_blank(doctor_name.trim()),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.condition.is_none() && self.doctor_name.is_none()
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
