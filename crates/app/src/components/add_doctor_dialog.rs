use client::dashboard::{AddDoctorOutcome, AdminDashboard};
use client::{ModalKind, SessionStore};
use dioxus::prelude::*;
use shared_types::{NewDoctor, SPECIALTIES, TIME_SLOTS};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, DialogActions, FormSelect, Input, ModalDialog,
};

use crate::browser;
use crate::modal::use_modal;
use crate::session::use_session;
use crate::use_api;

/// Admin form for a new doctor. Success reloads the whole page.
#[component]
pub fn AddDoctorDialog() -> Element {
    let modal = use_modal();
    let session = use_session();
    let api = use_api();
    let toast = use_toast();
    let dashboard = use_hook(|| AdminDashboard::new(api));

    let mut name = use_signal(String::new);
    let mut specialty = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut times = use_signal(Vec::<String>::new);
    let mut in_flight = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let doctor = NewDoctor {
            name: name.peek().clone(),
            specialty: specialty.peek().clone(),
            email: email.peek().clone(),
            password: password.peek().clone(),
            phone: phone.peek().clone(),
            available_times: times.peek().clone(),
        };
        let pending = dashboard.add_doctor(doctor, &session.snapshot());
        spawn(async move {
            in_flight.set(true);
            let outcome = pending.await;
            in_flight.set(false);
            match outcome {
                AddDoctorOutcome::Added { message } => {
                    notify(toast, true, message);
                    modal.close();
                    browser::reload_page();
                }
                other => notify(toast, false, other.message()),
            }
        });
    };

    rsx! {
        ModalDialog {
            title: ModalKind::AddDoctor.title().to_string(),
            on_close: move |_| modal.close(),
            form { class: "portal-form", onsubmit: handle_submit,
                Input {
                    name: "doctorName",
                    label: "Name",
                    value: name(),
                    on_input: move |e: FormEvent| name.set(e.value()),
                    required: true,
                }
                FormSelect {
                    name: "doctorSpecialty",
                    label: "Specialty",
                    placeholder: "Select specialty",
                    value: specialty(),
                    onchange: move |e: FormEvent| specialty.set(e.value()),
                    for s in SPECIALTIES.iter() {
                        option { value: "{s}", "{s}" }
                    }
                }
                Input {
                    name: "doctorEmail",
                    label: "Email",
                    input_type: "email",
                    value: email(),
                    on_input: move |e: FormEvent| email.set(e.value()),
                    required: true,
                }
                Input {
                    name: "doctorPassword",
                    label: "Password",
                    input_type: "password",
                    value: password(),
                    on_input: move |e: FormEvent| password.set(e.value()),
                    required: true,
                }
                Input {
                    name: "doctorPhone",
                    label: "Phone",
                    input_type: "tel",
                    value: phone(),
                    on_input: move |e: FormEvent| phone.set(e.value()),
                }
                fieldset { class: "portal-checkbox-group",
                    legend { "Available times" }
                    for slot in TIME_SLOTS.iter().copied() {
                        label { key: "{slot}",
                            input {
                                r#type: "checkbox",
                                value: "{slot}",
                                checked: times.read().iter().any(|t| t == slot),
                                onchange: move |e: FormEvent| {
                                    let on = e.checked();
                                    let mut list = times.write();
                                    list.retain(|t| t != slot);
                                    if on {
                                        list.push(slot.to_string());
                                    }
                                },
                            }
                            "{slot}"
                        }
                    }
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| modal.close(),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        disabled: in_flight(),
                        if in_flight() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
