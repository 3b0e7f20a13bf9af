use crate::models::Rectangle;
use std::fmt;

/// Identifier handed out by a [`crate::GridDocument`] when an item is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// A finalized selection on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub rect: Rectangle,
}

impl Item {
    pub fn new(id: ItemId, rect: Rectangle) -> Self {
        Self { id, rect }
    }
}
