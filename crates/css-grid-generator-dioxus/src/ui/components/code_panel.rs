use css_grid_generator_engine::OutputKind;
use dioxus::prelude::*;

/// Read-only view of one generated artifact with a copy button
#[component]
pub fn CodePanel(kind: OutputKind, code: String, on_copy: EventHandler<OutputKind>) -> Element {
    let label = kind.label();

    rsx! {
        div {
            class: "code-panel",
            button {
                class: "copy-button",
                onclick: move |_| on_copy.call(kind),
                "📋 Copy {label}"
            }
            pre {
                class: "code-output",
                "{code}"
            }
        }
    }
}
