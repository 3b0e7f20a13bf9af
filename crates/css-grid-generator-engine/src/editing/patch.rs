use crate::models::ItemId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Id of the item created by the command, if any
    pub added: Option<ItemId>,
    /// Whether the derived CSS or HTML text differs from before the command
    pub output_changed: bool,
    pub version: u64,
}
