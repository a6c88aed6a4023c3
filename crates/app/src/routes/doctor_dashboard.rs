use std::future::Future;

use client::dashboard::{AppointmentTable, DoctorDashboard};
use client::SessionStore;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableBody, DataTableColumn, DataTableHeader,
    DataTableMessageRow, FilterBar, Input, PageHeader, PageTitle,
};

use crate::components::{AppointmentRows, APPOINTMENT_COLUMNS};
use crate::routes::Route;
use crate::session::use_session;
use crate::use_api;

#[component]
pub fn DoctorDashboardPage() -> Element {
    rsx! { DoctorAppointments {} }
}

/// `/doctorDashboard/{token}`: the token is picked up from the path when
/// the session has none.
#[component]
pub fn DoctorDashboardTokenPage(token: String) -> Element {
    rsx! { DoctorAppointments { key: "{token}" } }
}

/// Today's appointments, narrowed by date picker and patient-name search.
#[component]
fn DoctorAppointments() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let api = use_api();
    let base_url = api.base_url().to_string();

    let mut dashboard =
        use_signal(|| DoctorDashboard::new(api, &session.snapshot(), &route.to_string()));
    let table = use_signal(|| None::<AppointmentTable>);
    let mut search = use_signal(String::new);

    use_hook(move || show(dashboard.peek().reload(), table));

    let selected_date = dashboard.read().selected_date().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor_dashboard.css") }
        PageHeader {
            PageTitle { "Patient Appointments" }
        }
        FilterBar {
            div { class: "appointment-search",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                Input {
                    name: "searchBar",
                    placeholder: "Search by patient name",
                    value: search(),
                    on_input: move |e: FormEvent| {
                        let value = e.value();
                        search.set(value.clone());
                        show(dashboard.write().search(&value), table);
                    },
                }
            }
            Input {
                name: "datePicker",
                input_type: "date",
                value: selected_date,
                on_change: move |e: FormEvent| show(dashboard.write().pick_date(&e.value()), table),
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| show(dashboard.write().today(), table),
                "Today"
            }
        }
        DataTable {
            DataTableHeader {
                for column in APPOINTMENT_COLUMNS {
                    DataTableColumn { "{column}" }
                }
            }
            DataTableBody {
                match table() {
                    Some(table) => rsx! { AppointmentRows { table, base_url } },
                    None => rsx! {
                        DataTableMessageRow {
                            colspan: APPOINTMENT_COLUMNS.len() as u32,
                            message: "Loading appointments...".to_string(),
                        }
                    },
                }
            }
        }
    }
}

/// Commit a reload unless a newer one superseded it.
fn show(
    pending: impl Future<Output = Option<AppointmentTable>> + 'static,
    mut table: Signal<Option<AppointmentTable>>,
) {
    spawn(async move {
        if let Some(next) = pending.await {
            table.set(Some(next));
        }
    });
}
