use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Hosts the notification stack. Wrap the router in this once.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Show `message` as a success or error notification.
pub fn notify(toasts: Toasts, success: bool, message: impl Into<String>) {
    if success {
        toasts.success(message.into(), ToastOptions::new());
    } else {
        toasts.error(message.into(), ToastOptions::new());
    }
}
