/*!
 * # Editing Core
 *
 * State and state transitions behind the grid editor.
 *
 * ## Architecture Overview
 *
 * ### 1. Gestures produce rectangles
 * - A [`DragGesture`] turns pointer-down / pointer-enter / pointer-up events
 *   into a single normalized [`crate::Rectangle`]
 * - The gesture only holds the transient hover area; finalized rectangles
 *   belong to the document
 *
 * ### 2. Command-Based Editing
 * - All mutations of a [`GridDocument`] are expressed as commands (`Cmd`)
 * - Applying a command returns a [`Patch`] describing what changed
 *
 * ### 3. Derived output is recomputed explicitly
 * - After every command the document calls [`crate::derive_output`], a pure
 *   function of dimensions, items and output options
 * - The UI reads the cached text and never derives it on its own
 *
 * ## Usage Pattern
 *
 * ```rust
 * use css_grid_generator_engine::editing::*;
 * use css_grid_generator_engine::{CellPosition, GridDimensions, OutputOptions};
 *
 * let mut doc = GridDocument::new(GridDimensions::default(), OutputOptions::default());
 *
 * let mut gesture = DragGesture::default();
 * gesture.pointer_down(CellPosition::new(2, 3));
 * gesture.pointer_enter(CellPosition::new(1, 1));
 *
 * if let Some(rect) = gesture.pointer_up() {
 *     doc.apply(Cmd::AddItem(rect));
 * }
 *
 * assert!(doc.output().css.contains("grid-column: 1 / 4;"));
 * ```
 */

pub mod commands;
pub mod document;
pub mod gesture;
pub mod patch;

pub use commands::Cmd;
pub use document::GridDocument;
pub use gesture::{CellState, DragGesture, cell_state};
pub use patch::Patch;
