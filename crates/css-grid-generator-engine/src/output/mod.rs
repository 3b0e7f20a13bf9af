pub mod declarations;
pub mod parse;

use crate::models::{GridDimensions, Item};
use declarations::{container_declarations, css_rule, item_declarations};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub use parse::{ParseError, ParsedItem, parse_item_rules};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OutputOptionsError {
    #[error("{field} '{value}' is not a valid CSS class name")]
    InvalidClassName { field: &'static str, value: String },
    #[error("Item label must not be empty")]
    EmptyItemLabel,
}

/// Naming used in the generated markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Class of the grid container
    pub container_class: String,
    /// Item classes are this prefix followed by the 1-based item number
    pub item_class_prefix: String,
    /// Item text is this label followed by the 1-based item number
    pub item_label: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            container_class: "grid-preview".to_string(),
            item_class_prefix: "item-".to_string(),
            item_label: "Item".to_string(),
        }
    }
}

impl OutputOptions {
    pub fn validate(&self) -> Result<(), OutputOptionsError> {
        static CLASS_NAME: OnceLock<Regex> = OnceLock::new();
        let class_name = CLASS_NAME.get_or_init(|| {
            Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").expect("Invalid class name regex")
        });

        if !class_name.is_match(&self.container_class) {
            return Err(OutputOptionsError::InvalidClassName {
                field: "container_class",
                value: self.container_class.clone(),
            });
        }
        // The prefix is completed by a number, so it only has to form a valid start
        let sample_item_class = format!("{}1", self.item_class_prefix);
        if !class_name.is_match(&sample_item_class) {
            return Err(OutputOptionsError::InvalidClassName {
                field: "item_class_prefix",
                value: self.item_class_prefix.clone(),
            });
        }
        if self.item_label.trim().is_empty() {
            return Err(OutputOptionsError::EmptyItemLabel);
        }
        Ok(())
    }

    /// Class of the item numbered `number` (1-based)
    pub fn item_class(&self, number: usize) -> String {
        format!("{}{number}", self.item_class_prefix)
    }

    /// Text content of the item numbered `number` (1-based)
    pub fn item_text(&self, number: usize) -> String {
        format!("{} {number}", self.item_label)
    }
}

/// Which generated artifact to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Css,
    Html,
}

impl OutputKind {
    pub fn label(&self) -> &'static str {
        match self {
            OutputKind::Css => "CSS",
            OutputKind::Html => "HTML",
        }
    }
}

/// Generated stylesheet and markup for the current grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedOutput {
    pub css: String,
    pub html: String,
}

impl DerivedOutput {
    pub fn text(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Css => &self.css,
            OutputKind::Html => &self.html,
        }
    }
}

/// Build the CSS and HTML for a grid and its items.
///
/// Items are numbered from 1 in slice order; that number appears in both the
/// rule selector and the element's class and text.
pub fn derive_output(
    dimensions: &GridDimensions,
    items: &[Item],
    options: &OutputOptions,
) -> DerivedOutput {
    let base_css = format!(
        "\n{}\n",
        css_rule(&options.container_class, &container_declarations(dimensions))
    );
    let item_css = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "\n{}",
                css_rule(&options.item_class(index + 1), &item_declarations(&item.rect))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let children = (1..=items.len())
        .map(|number| {
            format!(
                "<div class=\"{}\">{}</div>",
                html_escape::encode_double_quoted_attribute(&options.item_class(number)),
                html_escape::encode_text(&options.item_text(number)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n  ");
    let html = format!(
        "<div class=\"{}\">\n  {children}\n</div>",
        html_escape::encode_double_quoted_attribute(&options.container_class)
    );

    DerivedOutput {
        css: base_css + &item_css,
        html,
    }
}
