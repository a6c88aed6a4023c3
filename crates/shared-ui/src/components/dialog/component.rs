use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("portal-dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

/// Footer row for a dialog's submit/cancel buttons.
#[component]
pub fn DialogActions(children: Element) -> Element {
    rsx! {
        div { class: "portal-dialog-actions", {children} }
    }
}

/// A dialog that stays open while mounted. Escape, the backdrop and any
/// other dismissal call `on_close`; the owner unmounts it.
#[component]
pub fn ModalDialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "{title}" }
                {children}
            }
        }
    }
}
