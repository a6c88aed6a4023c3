use client::dashboard::sign_up;
use client::ModalKind;
use dioxus::prelude::*;
use shared_types::NewPatient;
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, DialogActions, Input, ModalDialog,
};

use crate::modal::use_modal;
use crate::use_api;

/// Patient registration. A successful sign-up switches to the patient login.
#[component]
pub fn SignupDialog() -> Element {
    let modal = use_modal();
    let api = use_api();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut in_flight = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let patient = NewPatient {
            name: name.peek().clone(),
            email: email.peek().clone(),
            password: password.peek().clone(),
            phone: phone.peek().clone(),
            address: address.peek().clone(),
        };
        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            let result = sign_up(patient, &api).await;
            in_flight.set(false);
            notify(toast, result.success, result.message);
            if result.success {
                modal.open(ModalKind::PatientLogin);
            }
        });
    };

    rsx! {
        ModalDialog {
            title: ModalKind::PatientSignup.title().to_string(),
            on_close: move |_| modal.close(),
            form { class: "portal-form", onsubmit: handle_submit,
                Input {
                    name: "signupName",
                    label: "Name",
                    value: name(),
                    on_input: move |e: FormEvent| name.set(e.value()),
                    required: true,
                }
                Input {
                    name: "signupEmail",
                    label: "Email",
                    input_type: "email",
                    value: email(),
                    on_input: move |e: FormEvent| email.set(e.value()),
                    required: true,
                }
                Input {
                    name: "signupPassword",
                    label: "Password",
                    input_type: "password",
                    value: password(),
                    on_input: move |e: FormEvent| password.set(e.value()),
                    required: true,
                }
                Input {
                    name: "signupPhone",
                    label: "Phone",
                    input_type: "tel",
                    value: phone(),
                    on_input: move |e: FormEvent| phone.set(e.value()),
                }
                Input {
                    name: "signupAddress",
                    label: "Address",
                    value: address(),
                    on_input: move |e: FormEvent| address.set(e.value()),
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
                        "Sign Up"
                    }
                }
            }
        }
    }
}
