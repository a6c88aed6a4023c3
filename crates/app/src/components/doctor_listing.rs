use client::dashboard::{BoardUpdate, DoctorBoard, DoctorListing};
use dioxus::prelude::*;
use shared_types::{Doctor, DoctorFilter, Patient, SPECIALTIES, TIME_SLOTS};
use shared_ui::{notify, use_toast, CardGrid, FilterBar, FormSelect, Input, Toasts};

use super::DoctorCard;
use crate::use_api;

/// Doctor cards with the name/time/specialty filter above them.
///
/// Lists every doctor on mount. Each input change re-queries; replies that
/// arrive after a newer query was sent are dropped.
#[component]
pub fn DoctorListingPanel(
    #[props(default)] on_book: Option<EventHandler<(Doctor, Patient)>>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let board = use_hook(|| DoctorBoard::new(api));
    let mut listing = use_signal(|| None::<DoctorListing>);
    let mut name = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut specialty = use_signal(String::new);

    use_hook({
        let board = board.clone();
        move || {
            let pending = board.load();
            spawn(async move {
                if let Some(update) = pending.await {
                    commit(update, listing, toast);
                }
            })
        }
    });

    let refilter = {
        let board = board.clone();
        move || {
            let filter = DoctorFilter::from_inputs(&name.peek(), &time.peek(), &specialty.peek());
            let pending = board.filter(filter);
            spawn(async move {
                if let Some(update) = pending.await {
                    commit(update, listing, toast);
                }
            });
        }
    };
    let on_name = {
        let refilter = refilter.clone();
        move |evt: FormEvent| {
            name.set(evt.value());
            refilter();
        }
    };
    let on_time = {
        let refilter = refilter.clone();
        move |evt: FormEvent| {
            time.set(evt.value());
            refilter();
        }
    };
    let on_specialty = move |evt: FormEvent| {
        specialty.set(evt.value());
        refilter();
    };

    rsx! {
        FilterBar {
            Input {
                name: "searchBar",
                placeholder: "Search by doctor name",
                value: name(),
                on_input: on_name,
            }
            FormSelect {
                name: "filterTime",
                placeholder: "Sort by time",
                value: time(),
                onchange: on_time,
                for slot in TIME_SLOTS.iter() {
                    option { value: "{slot}", "{slot}" }
                }
            }
            FormSelect {
                name: "filterSpecialty",
                placeholder: "Filter by specialty",
                value: specialty(),
                onchange: on_specialty,
                for s in SPECIALTIES.iter() {
                    option { value: "{s}", "{s}" }
                }
            }
        }
        match listing() {
            None => rsx! { p { class: "portal-empty", "Loading doctors..." } },
            Some(DoctorListing::Empty(message)) => rsx! { p { class: "portal-empty", "{message}" } },
            Some(DoctorListing::Cards(doctors)) => rsx! {
                CardGrid {
                    for doctor in doctors {
                        DoctorCard {
                            key: "{doctor.id}",
                            doctor: doctor.clone(),
                            on_removed: move |id| {
                                if let Some(current) = listing.write().as_mut() {
                                    current.remove(id);
                                }
                            },
                            on_book,
                        }
                    }
                }
            },
        }
    }
}

fn commit(update: BoardUpdate, mut listing: Signal<Option<DoctorListing>>, toast: Toasts) {
    listing.set(Some(update.listing));
    if let Some(alert) = update.alert {
        notify(toast, false, alert);
    }
}
