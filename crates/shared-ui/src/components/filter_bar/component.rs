use dioxus::prelude::*;

/// Row of filter inputs above a listing (search box, selects, date picker).
#[component]
pub fn FilterBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-bar", role: "search",
            {children}
        }
    }
}
