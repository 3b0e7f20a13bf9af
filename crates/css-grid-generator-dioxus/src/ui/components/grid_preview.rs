use css_grid_generator_engine::output::declarations::{
    Declaration, container_declarations, inline_style, item_declarations,
};
use css_grid_generator_engine::{GridDimensions, Item, OutputOptions, Rectangle};
use dioxus::prelude::*;

/// Inline style of the preview container: the generated container rule plus
/// preview-only rounding
pub fn preview_container_style(dimensions: &GridDimensions) -> String {
    let mut declarations = container_declarations(dimensions);
    declarations.push(Declaration::new("border-radius", "8px"));
    inline_style(&declarations)
}

/// Inline style of a preview item: the generated item rule plus
/// non-selectable text
pub fn preview_item_style(rect: &Rectangle) -> String {
    let mut declarations = item_declarations(rect);
    declarations.push(Declaration::new("user-select", "none"));
    inline_style(&declarations)
}

/// Live rendering of the generated layout, styled inline from the same
/// declarations that make up the CSS output
#[component]
pub fn GridPreview(dimensions: GridDimensions, items: Vec<Item>, options: OutputOptions) -> Element {
    let container_style = preview_container_style(&dimensions);
    let rendered_items: Vec<_> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let number = index + 1;
            (
                item.id,
                options.item_class(number),
                preview_item_style(&item.rect),
                options.item_text(number),
            )
        })
        .collect();

    rsx! {
        div {
            class: "grid-preview-frame",
            div {
                class: "{options.container_class}",
                style: "{container_style}",
                for (id, class_name, style, text) in rendered_items {
                    div {
                        key: "{id}",
                        class: "{class_name}",
                        style: "{style}",
                        "{text}"
                    }
                }
            }
        }
    }
}
