use client::ModalKind;
use dioxus::prelude::*;
use shared_ui::{Button, PageHeader, PageTitle};

use crate::components::DoctorListingPanel;
use crate::modal::use_modal;

/// Admin view of the doctor directory. Requests take the token from the
/// session; the copy in the path only identifies the page.
#[component]
pub fn AdminDashboardPage(token: String) -> Element {
    let modal = use_modal();

    use_hook(move || tracing::debug!(path_token = !token.is_empty(), "Admin dashboard opened"));

    rsx! {
        PageHeader {
            PageTitle { "Doctors" }
            Button { onclick: move |_| modal.open(ModalKind::AddDoctor), "Add Doctor" }
        }
        DoctorListingPanel {}
    }
}
