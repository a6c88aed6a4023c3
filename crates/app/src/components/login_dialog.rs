use client::login::sign_in;
use dioxus::prelude::*;
use shared_types::{Credentials, LoginRole};
use shared_ui::{
    notify, use_toast, Button, ButtonVariant, DialogActions, Input, ModalDialog,
};

use crate::modal::use_modal;
use crate::routes::navigate_to;
use crate::session::use_session;
use crate::use_api;

/// Login form for one role. On success the session is stored and the user
/// lands on that role's dashboard.
#[component]
pub fn LoginDialog(role: LoginRole, title: &'static str) -> Element {
    let modal = use_modal();
    let session = use_session();
    let api = use_api();
    let toast = use_toast();

    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut in_flight = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let identifier_label = match role {
        LoginRole::Admin => "Username",
        LoginRole::Doctor | LoginRole::Patient => "Email",
    };
    let identifier_type = match role {
        LoginRole::Admin => "text",
        LoginRole::Doctor | LoginRole::Patient => "email",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if in_flight() {
            return;
        }
        let credentials = Credentials {
            identifier: identifier.peek().clone(),
            password: password.peek().clone(),
        };
        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            match sign_in(&api, &session, role, &credentials).await {
                Ok(landing) => {
                    modal.close();
                    notify(toast, true, format!("Logged in as {}", role.label()));
                    navigate_to(&landing);
                }
                Err(e) => {
                    tracing::warn!(role = role.label(), error = %e, "Login failed");
                    error.set(Some(e.friendly_message()));
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        ModalDialog {
            title: title.to_string(),
            on_close: move |_| modal.close(),
            form { class: "portal-form", onsubmit: handle_submit,
                Input {
                    name: "loginIdentifier",
                    label: identifier_label,
                    input_type: identifier_type,
                    value: identifier(),
                    on_input: move |e: FormEvent| identifier.set(e.value()),
                    required: true,
                }
                Input {
                    name: "loginPassword",
                    label: "Password",
                    input_type: "password",
                    value: password(),
                    on_input: move |e: FormEvent| password.set(e.value()),
                    required: true,
                }
                if let Some(message) = error() {
                    p { class: "portal-form-error", "{message}" }
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
                        if in_flight() { "Logging in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
