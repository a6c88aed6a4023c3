use client::card::{confirm_delete, delete_prompt, start_booking, BookingOutcome, DeleteOutcome};
use client::render::{render_doctor_card, BookingAffordance, DoctorCardView, TimeTag};
use client::{ModalKind, SessionStore};
use dioxus::prelude::*;
use shared_types::{Doctor, Patient};
use shared_ui::{
    notify, use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel,
    AlertDialogContent, AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge,
    BadgeVariant, Button, ButtonVariant, Card, CardActions, CardContent, CardTitle,
};

use crate::modal::use_modal;
use crate::session::use_session;
use crate::use_api;

/// A doctor card whose buttons depend on the current session.
#[component]
pub fn DoctorCard(
    doctor: Doctor,
    on_removed: EventHandler<i64>,
    #[props(default)] on_book: Option<EventHandler<(Doctor, Patient)>>,
) -> Element {
    let session = use_session();
    let view = render_doctor_card(&doctor, &session.current());

    rsx! {
        Card { "data-doctor-id": "{view.doctor_id}",
            DoctorInfo { view: view.clone() }
            CardActions {
                if view.actions.delete {
                    DeleteDoctorButton { doctor: doctor.clone(), on_removed }
                }
                BookButton {
                    doctor: doctor.clone(),
                    affordance: view.actions.booking,
                    on_book,
                }
            }
        }
    }
}

/// Name, specialty, email and availability tags.
#[component]
pub fn DoctorInfo(view: DoctorCardView) -> Element {
    rsx! {
        CardContent {
            CardTitle { "{view.name}" }
            Badge { variant: BadgeVariant::Specialty, "{view.specialty}" }
            p { class: "doctor-email", "{view.email}" }
            div { class: "doctor-times",
                for (i, tag) in view.times.iter().enumerate() {
                    match tag {
                        TimeTag::Slot(slot) => rsx! {
                            Badge { key: "{i}", variant: BadgeVariant::Slot, "{slot}" }
                        },
                        TimeTag::Placeholder => rsx! {
                            Badge { key: "{i}", variant: BadgeVariant::Muted, "{tag.label()}" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteDoctorButton(doctor: Doctor, on_removed: EventHandler<i64>) -> Element {
    let session = use_session();
    let api = use_api();
    let toast = use_toast();
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let prompt = delete_prompt(&doctor);
    let doctor_id = doctor.id;

    let handle_confirm = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            deleting.set(true);
            let outcome = confirm_delete(doctor_id, &session.snapshot(), &api).await;
            deleting.set(false);
            confirming.set(false);
            match outcome {
                DeleteOutcome::Removed { doctor_id, message } => {
                    notify(toast, true, message);
                    on_removed.call(doctor_id);
                }
                other => notify(toast, false, other.message()),
            }
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Destructive,
            onclick: move |_| confirming.set(true),
            "Delete"
        }
        AlertDialogRoot {
            open: confirming(),
            on_open_change: move |v| confirming.set(v),
            AlertDialogContent {
                AlertDialogTitle { "Delete Doctor" }
                AlertDialogDescription { "{prompt}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: handle_confirm,
                        if deleting() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

#[component]
fn BookButton(
    doctor: Doctor,
    affordance: BookingAffordance,
    on_book: Option<EventHandler<(Doctor, Patient)>>,
) -> Element {
    let session = use_session();
    let modal = use_modal();
    let api = use_api();
    let toast = use_toast();

    let handle_click = move |_: MouseEvent| {
        let api = api.clone();
        let doctor = doctor.clone();
        spawn(async move {
            match start_booking(&doctor, &session.snapshot(), &api).await {
                BookingOutcome::OpenOverlay { doctor, patient } => {
                    if let Some(handler) = &on_book {
                        handler.call((doctor, patient));
                    }
                }
                BookingOutcome::Retry { message } => notify(toast, false, message),
                BookingOutcome::PromptLogin { message } => {
                    notify(toast, false, message);
                    modal.open(ModalKind::PatientLogin);
                }
                BookingOutcome::Disabled => {}
            }
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            disabled: affordance == BookingAffordance::Disabled,
            onclick: handle_click,
            "Book Now"
        }
    }
}
