pub mod admin_dashboard;
pub mod doctor_dashboard;
pub mod not_found;
pub mod patient_appointments;
pub mod patient_dashboard;
pub mod role_select;

use dioxus::prelude::*;

use crate::components::PortalHeader;
use crate::modal::ModalOutlet;

use admin_dashboard::AdminDashboardPage;
use doctor_dashboard::{DoctorDashboardPage, DoctorDashboardTokenPage};
use not_found::NotFound;
use patient_appointments::PatientAppointmentsPage;
use patient_dashboard::{LoggedPatientDashboardPage, PatientDashboardPage};
use role_select::RoleSelect;

/// Application routes. Paths match the ones the backend and stored links use.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PortalLayout)]
    #[route("/")]
    RoleSelect {},
    #[route("/adminDashboard/:token")]
    AdminDashboardPage { token: String },
    #[route("/doctorDashboard")]
    DoctorDashboardPage {},
    #[route("/doctorDashboard/:token")]
    DoctorDashboardTokenPage { token: String },
    #[route("/patientDashboard")]
    PatientDashboardPage {},
    #[route("/loggedPatientDashboard")]
    LoggedPatientDashboardPage {},
    #[route("/patientAppointments")]
    PatientAppointmentsPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Navigate to an app path such as `/doctorDashboard`.
pub fn navigate_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => tracing::warn!(path, "Not an app route; staying put"),
    }
}

/// Header above every page, with the open dialog (if any) on top.
#[component]
fn PortalLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "portal-shell",
            PortalHeader {}
            main { class: "portal-main",
                Outlet::<Route> {}
            }
            footer { class: "portal-footer",
                "© Hospital CMS. All rights reserved."
            }
        }
        ModalOutlet {}
    }
}
