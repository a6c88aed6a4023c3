use client::dashboard::{load_patient_appointments, PatientAppointments};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{Appointment, AppointmentCondition, PatientAppointmentFilter};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableMessageRow, DataTableRow, FilterBar, FormSelect, Input, MessageTone, PageHeader,
    PageTitle,
};

use crate::format_helpers::appointment_date;
use crate::session::use_session;
use crate::use_api;

const COLUMNS: [&str; 3] = ["Appointment", "Doctor", "Date"];

/// The logged-in patient's own bookings, narrowed by past/upcoming and
/// doctor name.
#[component]
pub fn PatientAppointmentsPage() -> Element {
    let session = use_session();
    let api = use_api();
    let mut condition = use_signal(String::new);
    let mut doctor = use_signal(String::new);

    // Re-runs on every filter change; the previous request is dropped.
    let data = use_resource(move || {
        let api = api.clone();
        let session = session.current();
        let filter = PatientAppointmentFilter::from_inputs(&condition(), &doctor());
        async move { load_patient_appointments(&session, &filter, &api).await }
    });

    let colspan = COLUMNS.len() as u32;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor_dashboard.css") }
        PageHeader {
            PageTitle { "My Appointments" }
        }
        FilterBar {
            div { class: "appointment-search",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                Input {
                    name: "searchBar",
                    placeholder: "Search by doctor name",
                    value: doctor(),
                    on_input: move |e: FormEvent| doctor.set(e.value()),
                }
            }
            FormSelect {
                name: "appointmentFilter",
                placeholder: "All Appointments",
                value: condition(),
                onchange: move |e: FormEvent| condition.set(e.value()),
                for c in AppointmentCondition::ALL {
                    option { value: c.as_str(), {c.label()} }
                }
            }
        }
        DataTable {
            DataTableHeader {
                for column in COLUMNS {
                    DataTableColumn { "{column}" }
                }
            }
            DataTableBody {
                match &*data.read() {
                    None => rsx! {
                        DataTableMessageRow { colspan, message: "Loading appointments...".to_string() }
                    },
                    Some(PatientAppointments::Rows(rows)) => rsx! {
                        for (i, appt) in rows.iter().enumerate() {
                            OwnAppointmentRow { key: "{i}", appointment: appt.clone() }
                        }
                    },
                    Some(PatientAppointments::Empty(message)) => rsx! {
                        DataTableMessageRow { colspan, message: message.to_string() }
                    },
                    Some(PatientAppointments::Error(message) | PatientAppointments::SignedOut(message)) => rsx! {
                        DataTableMessageRow { colspan, tone: MessageTone::Error, message: message.to_string() }
                    },
                }
            }
        }
    }
}

#[component]
fn OwnAppointmentRow(appointment: Appointment) -> Element {
    let id = appointment.id.clone().unwrap_or_else(|| "-".to_string());
    let doctor = doctor_label(&appointment);
    let date = appointment_date(appointment.date.as_deref());

    rsx! {
        DataTableRow {
            DataTableCell { "{id}" }
            DataTableCell { "{doctor}" }
            DataTableCell { "{date}" }
        }
    }
}

/// Doctor name when the backend sent one, else the bare doctor id.
fn doctor_label(appointment: &Appointment) -> String {
    appointment
        .doctor_name
        .clone()
        .or_else(|| appointment.doctor_id.clone())
        .unwrap_or_else(|| "-".to_string())
}
