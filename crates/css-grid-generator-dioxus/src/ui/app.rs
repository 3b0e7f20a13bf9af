use super::components::{CodePanel, DimensionField, GridEditor, GridPreview};
use crate::platform;
use css_grid_generator_engine::{
    Cmd, DragGesture, GridDimensions, GridDocument, OutputKind, OutputOptions, Patch,
};
use dioxus::prelude::*;
use std::time::Duration;

const APP_CSS: &str = include_str!("../assets/app.css");

/// How long the "copied" acknowledgment stays up
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Finish the drag in progress, if any, as the command adding its rectangle
fn release_drag(gesture: &mut DragGesture) -> Option<Cmd> {
    gesture.pointer_up().map(Cmd::AddItem)
}

/// Info-level log line for a command that changed the item list
fn item_change_message(cmd: &Cmd, patch: &Patch) -> Option<String> {
    if let Some(id) = patch.added {
        return Some(format!("Added {id} (version {})", patch.version));
    }
    match cmd {
        Cmd::Reset => Some(format!("Reset all items (version {})", patch.version)),
        _ => None,
    }
}

/// The "copied" acknowledgment. Each copy gets a new ticket; a timer that
/// fires for an older ticket leaves the newer notice alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CopyNotice {
    shown: Option<OutputKind>,
    ticket: u64,
}

impl CopyNotice {
    fn show(&mut self, kind: OutputKind) -> u64 {
        self.ticket += 1;
        self.shown = Some(kind);
        self.ticket
    }

    fn expire(&mut self, ticket: u64) {
        if self.ticket == ticket {
            self.shown = None;
        }
    }

    fn clear(&mut self) {
        self.shown = None;
    }

    fn message(&self) -> Option<String> {
        self.shown
            .map(|kind| format!("Copied {} to clipboard!", kind.label()))
    }
}

#[component]
pub fn App(dimensions: GridDimensions, options: OutputOptions) -> Element {
    let mut grid = use_signal(|| GridDocument::new(dimensions, options.clone()));
    let mut gesture = use_signal(DragGesture::default);
    let mut notice = use_signal(CopyNotice::default);

    let mut apply = move |cmd: Cmd| {
        log::debug!("Applying {cmd:?}");
        let patch = grid.write().apply(cmd.clone());
        if let Some(message) = item_change_message(&cmd, &patch) {
            log::info!("{message}");
        }
        // A stale acknowledgment would refer to text that no longer exists
        if patch.output_changed {
            notice.write().clear();
        }
    };

    let copy = move |kind: OutputKind| {
        let text = grid.read().output().text(kind).to_string();
        spawn(async move {
            match platform::write_clipboard(text).await {
                Ok(()) => {
                    log::info!("Copied {} to clipboard", kind.label());
                    let ticket = notice.write().show(kind);
                    if let Err(e) = platform::sleep(NOTICE_DURATION).await {
                        log::warn!("Copy notice timer failed: {e}");
                    }
                    notice.write().expire(ticket);
                }
                Err(e) => log::warn!("Failed to copy {} to clipboard: {e}", kind.label()),
            }
        });
    };

    let (current, locked, items, options, css, html) = {
        let doc = grid.read();
        (
            doc.dimensions(),
            doc.rectangles(),
            doc.items().to_vec(),
            doc.options().clone(),
            doc.output().css.clone(),
            doc.output().html.clone(),
        )
    };

    let message = notice.read().message();

    rsx! {
        style { {APP_CSS} }
        div {
            class: "app-container",
            // Releasing the button anywhere in the window ends the drag
            onmouseup: move |_| {
                if !gesture.peek().is_dragging() {
                    return;
                }
                let finished = release_drag(&mut gesture.write());
                if let Some(cmd) = finished {
                    apply(cmd);
                }
            },
            h1 {
                class: "app-title",
                "⚙️ CSS Grid Generator"
            }
            div {
                class: "dimension-bar",
                DimensionField {
                    title: "Columns",
                    value: current.columns,
                    min: 1,
                    on_change: move |columns: i32| apply(Cmd::SetColumns(columns)),
                }
                DimensionField {
                    title: "Rows",
                    value: current.rows,
                    min: 1,
                    on_change: move |rows: i32| apply(Cmd::SetRows(rows)),
                }
                DimensionField {
                    title: "Gap (px)",
                    value: current.gap,
                    min: 0,
                    on_change: move |gap: i32| apply(Cmd::SetGap(gap)),
                }
            }
            div {
                class: "workspace",
                div {
                    class: "editor-column",
                    GridEditor {
                        rows: current.rows,
                        columns: current.columns,
                        locked,
                        gesture,
                    }
                }
                div {
                    class: "preview-column",
                    GridPreview {
                        dimensions: current,
                        items,
                        options,
                    }
                    button {
                        class: "reset-button",
                        onclick: move |_| apply(Cmd::Reset),
                        "🔄 Reset selections"
                    }
                }
            }
            if let Some(message) = message {
                div {
                    class: "copy-notice",
                    "{message}"
                }
            }
            div {
                class: "code-panels",
                CodePanel {
                    kind: OutputKind::Css,
                    code: css,
                    on_copy: copy,
                }
                CodePanel {
                    kind: OutputKind::Html,
                    code: html,
                    on_copy: copy,
                }
            }
        }
    }
}
