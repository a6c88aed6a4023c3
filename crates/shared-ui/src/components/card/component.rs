use dioxus::prelude::*;

/// Bordered container used for doctor cards and the role picker tiles.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "portal-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "portal-card-title", {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "portal-card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Button row at the bottom of a card.
#[component]
pub fn CardActions(children: Element) -> Element {
    rsx! {
        div { class: "portal-card-actions", {children} }
    }
}

/// Responsive grid of cards.
#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        div { class: "portal-card-grid", {children} }
    }
}
