use client::dashboard::submit_booking;
use client::SessionStore;
use dioxus::prelude::*;
use shared_types::{Doctor, Patient};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, DialogActions, FormSelect, Input, ModalDialog,
};

use crate::session::use_session;
use crate::use_api;

/// Booking overlay opened from a doctor card once the patient is known.
#[component]
pub fn BookingDialog(doctor: Doctor, patient: Patient, on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let api = use_api();
    let toast = use_toast();

    let mut date = use_signal(String::new);
    let mut slot = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let handle_submit = {
        let doctor = doctor.clone();
        let patient = patient.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let doctor = doctor.clone();
            let patient = patient.clone();
            let date = date.peek().clone();
            let slot = slot.peek().clone();
            spawn(async move {
                in_flight.set(true);
                let result =
                    submit_booking(&doctor, &patient, &date, &slot, &session.snapshot(), &api)
                        .await;
                in_flight.set(false);
                notify(toast, result.success, result.message);
                if result.success {
                    on_close.call(());
                }
            });
        }
    };

    rsx! {
        ModalDialog {
            title: format!("Book with Dr. {}", doctor.display_name()),
            on_close: move |_| on_close.call(()),
            form { class: "portal-form", onsubmit: handle_submit,
                p { class: "booking-patient", "{patient.name} ({patient.email})" }
                Input {
                    name: "bookingDate",
                    label: "Date",
                    input_type: "date",
                    value: date(),
                    on_input: move |e: FormEvent| date.set(e.value()),
                    required: true,
                }
                FormSelect {
                    name: "bookingSlot",
                    label: "Time",
                    placeholder: "Select a time slot",
                    value: slot(),
                    onchange: move |e: FormEvent| slot.set(e.value()),
                    for t in doctor.available_times.iter() {
                        option { key: "{t}", value: "{t}", "{t}" }
                    }
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        disabled: in_flight(),
                        "Confirm Booking"
                    }
                }
            }
        }
    }
}
