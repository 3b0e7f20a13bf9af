use css_grid_generator_engine::output::declarations::{grid_template, inline_style};
use css_grid_generator_engine::{CellState, DragGesture, GridDimensions, Rectangle, cell_state};
use dioxus::prelude::*;

/// Spacing between editor cells, independent of the gap being generated
const EDITOR_GAP: i32 = 8;

fn cell_classes(state: CellState) -> &'static str {
    match state {
        CellState::Empty => "grid-cell empty",
        CellState::Hovered => "grid-cell hovered",
        CellState::Locked => "grid-cell locked",
    }
}

fn cell_marker(state: CellState) -> &'static str {
    match state {
        CellState::Empty => "+",
        CellState::Hovered | CellState::Locked => "✓",
    }
}

/// Drag-to-select cell grid. Pointer-down and pointer-enter on cells feed
/// `gesture`; the release is handled by the owner of the signal so that it
/// counts anywhere in the window. The rectangles in `locked` are drawn as
/// taken.
#[component]
pub fn GridEditor(
    rows: i32,
    columns: i32,
    locked: Vec<Rectangle>,
    gesture: Signal<DragGesture>,
) -> Element {
    let mut gesture = gesture;

    let dimensions = GridDimensions::new(columns, rows, EDITOR_GAP);
    let grid_style = inline_style(&grid_template(columns, rows, EDITOR_GAP));
    let hover = gesture.read().hover_area();
    let cells: Vec<_> = dimensions
        .cells()
        .map(|(index, position)| {
            let state = cell_state(position, &locked, hover);
            (index, position, cell_classes(state), cell_marker(state))
        })
        .collect();

    rsx! {
        div {
            class: "grid-editor-wrapper",
            div {
                class: "grid-editor",
                style: "{grid_style}",
                for (index, position, classes, marker) in cells {
                    div {
                        key: "{index}",
                        class: "{classes}",
                        onmousedown: move |_| gesture.write().pointer_down(position),
                        onmouseenter: move |_| {
                            // Skip the write so hovering while idle doesn't re-render
                            if gesture.peek().is_dragging() {
                                gesture.write().pointer_enter(position);
                            }
                        },
                        "{marker}"
                    }
                }
            }
            p {
                class: "editor-hint",
                "Drag across cells to create items. Finished selections stay marked."
            }
        }
    }
}
