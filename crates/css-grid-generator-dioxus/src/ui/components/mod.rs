pub mod code_panel;
pub mod dimension_field;
pub mod grid_editor;
pub mod grid_preview;

pub use code_panel::CodePanel;
pub use dimension_field::DimensionField;
pub use grid_editor::GridEditor;
pub use grid_preview::GridPreview;
