use client::paths;
use client::{ModalKind, SessionStore};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShieldCheck, LdStethoscope, LdUser};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, Card, CardContent, CardGrid, CardTitle, PageHeader, PageTitle};

use crate::modal::use_modal;
use crate::routes::navigate_to;
use crate::session::use_session;

/// Landing page: pick a role. Admins and doctors log in first; patients
/// browse anonymously.
#[component]
pub fn RoleSelect() -> Element {
    let modal = use_modal();
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./role_select.css") }
        PageHeader {
            PageTitle { "Select your role" }
        }
        CardGrid {
            Card { class: "role-tile",
                CardContent {
                    Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 40, height: 40 }
                    CardTitle { "Admin" }
                    Button { onclick: move |_| modal.open(ModalKind::AdminLogin), "Continue" }
                }
            }
            Card { class: "role-tile",
                CardContent {
                    Icon::<LdStethoscope> { icon: LdStethoscope, width: 40, height: 40 }
                    CardTitle { "Doctor" }
                    Button { onclick: move |_| modal.open(ModalKind::DoctorLogin), "Continue" }
                }
            }
            Card { class: "role-tile",
                CardContent {
                    Icon::<LdUser> { icon: LdUser, width: 40, height: 40 }
                    CardTitle { "Patient" }
                    Button {
                        onclick: move |_| {
                            session.set_session(Role::Patient, None);
                            navigate_to(paths::PATIENT_DASHBOARD);
                        },
                        "Continue"
                    }
                }
            }
        }
    }
}
