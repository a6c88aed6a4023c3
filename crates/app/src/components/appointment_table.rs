use client::dashboard::AppointmentTable;
use dioxus::prelude::*;
use shared_ui::{DataTableCell, DataTableMessageRow, DataTableRow, MessageTone};

/// Header labels of the doctor's appointment table.
pub const APPOINTMENT_COLUMNS: [&str; 5] = ["Patient ID", "Name", "Phone No.", "Email", "Prescription"];

/// Body rows of the doctor's appointment table.
#[component]
pub fn AppointmentRows(table: AppointmentTable, base_url: String) -> Element {
    let colspan = APPOINTMENT_COLUMNS.len() as u32;
    match table {
        AppointmentTable::Rows(rows) => rsx! {
            for (i, row) in rows.into_iter().enumerate() {
                DataTableRow { key: "{i}",
                    DataTableCell { "{row.patient_id}" }
                    DataTableCell { "{row.name}" }
                    DataTableCell { "{row.phone}" }
                    DataTableCell { "{row.email}" }
                    DataTableCell {
                        a {
                            class: "prescription-link",
                            href: row.prescription.href(&base_url),
                            "Add Prescription"
                        }
                    }
                }
            }
        },
        AppointmentTable::Empty(message) => rsx! {
            DataTableMessageRow { colspan, message: message.to_string() }
        },
        AppointmentTable::Error(message) => rsx! {
            DataTableMessageRow { colspan, tone: MessageTone::Error, message: message.to_string() }
        },
    }
}
