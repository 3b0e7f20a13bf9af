//! Style declarations shared by the generated CSS text and the live preview.
//!
//! Both renderings are built from the lists below, so a placement written
//! into the stylesheet is always the placement shown in the preview.

use crate::models::{GridDimensions, Rectangle};
use std::fmt::Write;

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Track templates and gap for a grid container
pub fn grid_template(columns: i32, rows: i32, gap: i32) -> Vec<Declaration> {
    vec![
        Declaration::new("display", "grid"),
        Declaration::new("grid-template-columns", format!("repeat({columns}, 1fr)")),
        Declaration::new("grid-template-rows", format!("repeat({rows}, 1fr)")),
        Declaration::new("gap", format!("{gap}px")),
    ]
}

pub fn container_declarations(dimensions: &GridDimensions) -> Vec<Declaration> {
    let mut declarations = grid_template(dimensions.columns, dimensions.rows, dimensions.gap);
    declarations.extend([
        Declaration::new("background", "#eee"),
        Declaration::new("border", "1px solid #ccc"),
        Declaration::new("position", "relative"),
        Declaration::new("height", "300px"),
        Declaration::new("max-width", "600px"),
        Declaration::new("width", "100%"),
    ]);
    declarations
}

pub fn item_declarations(rect: &Rectangle) -> Vec<Declaration> {
    let (col_start, col_end) = rect.column_lines();
    let (row_start, row_end) = rect.row_lines();
    vec![
        Declaration::new("grid-column", format!("{col_start} / {col_end}")),
        Declaration::new("grid-row", format!("{row_start} / {row_end}")),
        Declaration::new("background", "rgba(59, 130, 246, 0.7)"),
        Declaration::new("border-radius", "6px"),
        Declaration::new("color", "white"),
        Declaration::new("display", "flex"),
        Declaration::new("align-items", "center"),
        Declaration::new("justify-content", "center"),
        Declaration::new("font-weight", "bold"),
    ]
}

/// Format a rule block: `.{class} {` then one indented declaration per line, then `}`
pub fn css_rule(class_name: &str, declarations: &[Declaration]) -> String {
    let mut rule = format!(".{class_name} {{\n");
    for declaration in declarations {
        // Writing into a String cannot fail
        let _ = writeln!(rule, "  {}: {};", declaration.property, declaration.value);
    }
    rule.push('}');
    rule
}

/// Format declarations for a `style` attribute
pub fn inline_style(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|declaration| format!("{}: {};", declaration.property, declaration.value))
        .collect::<Vec<_>>()
        .join(" ")
}
