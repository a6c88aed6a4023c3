use client::header::{compose_header, header_view, HeaderAction, HeaderEffect, HeaderView};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStethoscope;
use dioxus_free_icons::Icon;
use shared_ui::{notify, use_toast, Button, ButtonVariant};

use crate::modal::use_modal;
use crate::routes::{navigate_to, Route};
use crate::session::use_session;

/// Top bar. Rebuilt from `(path, role, token)` on every render.
#[component]
pub fn PortalHeader() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let session = use_session();
    let toast = use_toast();

    // Root clears the stored session; an expired login is cleared and sent
    // back to root. Runs on path changes only, so logging in from the root
    // page is not undone.
    use_effect(use_reactive!(|path| {
        if let HeaderView::Expired { message, redirect } = compose_header(&path, &session) {
            notify(toast, false, message);
            navigate_to(redirect);
        }
    }));

    let view = header_view(&path, &session.current());

    rsx! {
        header { class: "portal-header",
            div { class: "portal-logo",
                Icon::<LdStethoscope> { icon: LdStethoscope, width: 24, height: 24 }
                span { "Hospital CMS" }
            }
            if let HeaderView::Nav { actions, .. } = view {
                nav { class: "portal-nav",
                    for action in actions {
                        HeaderButton { key: "{action:?}", action }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderButton(action: HeaderAction) -> Element {
    let session = use_session();
    let modal = use_modal();

    rsx! {
        Button {
            variant: ButtonVariant::Nav,
            onclick: move |_| match action.activate(&session) {
                HeaderEffect::OpenModal(kind) => modal.open(kind),
                HeaderEffect::Navigate(path) => navigate_to(&path),
            },
            "{action.label()}"
        }
    }
}
