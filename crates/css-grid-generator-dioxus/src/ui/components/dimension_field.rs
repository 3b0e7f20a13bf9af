use dioxus::prelude::*;

/// Read a number field's text. An empty field counts as zero, like the
/// browser's own number coercion; text that isn't an integer is ignored.
pub fn parse_dimension_input(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    text.parse().ok()
}

#[component]
pub fn DimensionField(title: String, value: i32, min: i32, on_change: EventHandler<i32>) -> Element {
    rsx! {
        label {
            class: "dimension-field",
            span {
                class: "dimension-title",
                "{title}"
            }
            input {
                r#type: "number",
                class: "dimension-input",
                min: "{min}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    match parse_dimension_input(&evt.value()) {
                        Some(parsed) => on_change.call(parsed),
                        None => log::debug!("Ignoring non-numeric input {:?}", evt.value()),
                    }
                },
            }
        }
    }
}
