pub mod geometry;
pub mod item;

pub use geometry::{CellPosition, GridDimensions, Rectangle};
pub use item::{Item, ItemId};
