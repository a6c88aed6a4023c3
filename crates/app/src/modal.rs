use client::ModalKind;
use dioxus::prelude::*;

use crate::components::{AddDoctorDialog, LoginDialog, SignupDialog};

/// Which dialog is open, if any. Provided once at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalHost {
    pub open: Signal<Option<ModalKind>>,
}

impl ModalHost {
    pub fn new() -> Self {
        Self {
            open: Signal::new(None),
        }
    }

    pub fn open(&self, kind: ModalKind) {
        let mut open = self.open;
        open.set(Some(kind));
    }

    pub fn close(&self) {
        let mut open = self.open;
        open.set(None);
    }
}

pub fn use_modal() -> ModalHost {
    use_context::<ModalHost>()
}

/// Renders the open dialog.
#[component]
pub fn ModalOutlet() -> Element {
    let modal = use_modal();
    let kind = *modal.open.read();

    match kind {
        None => rsx! {},
        Some(ModalKind::AddDoctor) => rsx! { AddDoctorDialog {} },
        Some(ModalKind::PatientSignup) => rsx! { SignupDialog {} },
        Some(kind) => match kind.login_role() {
            Some(role) => rsx! { LoginDialog { key: "{kind.title()}", role, title: kind.title() } },
            None => rsx! {},
        },
    }
}
