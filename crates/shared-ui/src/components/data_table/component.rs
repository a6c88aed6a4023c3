use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section. Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Tone of a full-width message row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MessageTone {
    #[default]
    Info,
    Error,
}

/// A single row spanning every column, for "nothing found" and error text.
#[component]
pub fn DataTableMessageRow(
    colspan: u32,
    #[props(default)] tone: MessageTone,
    message: String,
) -> Element {
    let tone = match tone {
        MessageTone::Info => "info",
        MessageTone::Error => "error",
    };
    rsx! {
        tr { class: "data-table-message", "data-tone": tone,
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
