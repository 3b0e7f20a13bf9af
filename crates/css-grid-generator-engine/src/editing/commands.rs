use crate::models::Rectangle;

/// Mutations accepted by a [`crate::GridDocument`]
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Append a finalized selection as a new item
    AddItem(Rectangle),
    /// Drop every item; dimensions are kept
    Reset,
    SetColumns(i32),
    SetRows(i32),
    /// Gap between tracks, in pixels
    SetGap(i32),
}
