use dioxus::prelude::*;
use shared_types::{Doctor, Patient};
use shared_ui::{PageHeader, PageTitle};

use crate::components::{BookingDialog, DoctorListingPanel};

/// Anonymous patients browse; "Book Now" asks them to log in.
#[component]
pub fn PatientDashboardPage() -> Element {
    rsx! { PatientDoctors {} }
}

/// Logged-in patients can book straight from a card.
#[component]
pub fn LoggedPatientDashboardPage() -> Element {
    rsx! { PatientDoctors {} }
}

#[component]
fn PatientDoctors() -> Element {
    let mut booking = use_signal(|| None::<(Doctor, Patient)>);

    rsx! {
        PageHeader {
            PageTitle { "Find a Doctor" }
        }
        DoctorListingPanel {
            on_book: move |pair: (Doctor, Patient)| booking.set(Some(pair)),
        }
        if let Some((doctor, patient)) = booking() {
            BookingDialog {
                key: "{doctor.id}",
                doctor,
                patient,
                on_close: move |_| booking.set(None),
            }
        }
    }
}
