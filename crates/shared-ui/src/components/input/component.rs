use dioxus::prelude::*;

/// Labelled text input. `input_type` covers `email`, `password`, `date`, etc.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_change: Option<EventHandler<FormEvent>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "portal-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "portal-input-wrapper",
            if !label.is_empty() {
                label { class: "portal-input-label", r#for: "{name}", "{label}" }
            }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value,
                placeholder,
                required,
                oninput: move |evt| on_input.call(evt),
                onchange: move |evt| {
                    if let Some(handler) = &on_change {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
        }
    }
}
