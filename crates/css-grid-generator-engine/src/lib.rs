pub mod editing;
pub mod models;
pub mod output;

// Re-export key types for easier usage
pub use editing::{commands::*, document::*, gesture::*, patch::*};
pub use models::{geometry::*, item::*};
pub use output::{
    DerivedOutput, OutputKind, OutputOptions, OutputOptionsError, derive_output,
    parse::{ParseError, ParsedItem, parse_item_rules},
};
