//! Recover item rectangles from a generated stylesheet.

use crate::models::Rectangle;
use crate::output::OutputOptions;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("Rule for item {number} has no {property} declaration")]
    MissingProperty {
        number: usize,
        property: &'static str,
    },
    #[error("Rule for item {number} has an empty {property} span {start} / {end}")]
    InvalidSpan {
        number: usize,
        property: &'static str,
        start: u32,
        end: u32,
    },
    #[error("Number out of range: {0}")]
    InvalidNumber(String),
}

/// An item rule found in a stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedItem {
    /// 1-based number taken from the selector
    pub number: usize,
    pub rect: Rectangle,
}

/// Find every `.{item_class_prefix}{n}` rule in `css` and read its
/// `grid-column` / `grid-row` spans back into a rectangle.
///
/// Rules are returned sorted by item number.
pub fn parse_item_rules(css: &str, options: &OutputOptions) -> Result<Vec<ParsedItem>, ParseError> {
    static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
    let rule_regex = RULE_REGEX.get_or_init(|| {
        Regex::new(r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)\s*\{([^}]*)\}").expect("Invalid rule regex")
    });

    let mut items = Vec::new();
    for captures in rule_regex.captures_iter(css) {
        let Some(digits) = item_number_suffix(&captures[1], &options.item_class_prefix) else {
            continue;
        };
        let number: usize = parse_number(digits)?;
        let body = &captures[2];

        let (col_start, col_end) = read_span(body, number, "grid-column")?;
        let (row_start, row_end) = read_span(body, number, "grid-row")?;

        items.push(ParsedItem {
            number,
            rect: Rectangle::new(row_start, row_end - 1, col_start, col_end - 1),
        });
    }

    items.sort_by_key(|item| item.number);
    Ok(items)
}

/// The digits following `prefix` when `class_name` is an item class
fn item_number_suffix<'a>(class_name: &'a str, prefix: &str) -> Option<&'a str> {
    let digits = class_name.strip_prefix(prefix)?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

fn read_span(body: &str, number: usize, property: &'static str) -> Result<(u32, u32), ParseError> {
    static SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
    let span_regex = SPAN_REGEX.get_or_init(|| {
        Regex::new(r"(?:^|[;\s])(grid-column|grid-row)\s*:\s*(\d+)\s*/\s*(\d+)")
            .expect("Invalid span regex")
    });

    let captures = span_regex
        .captures_iter(body)
        .find(|captures| &captures[1] == property)
        .ok_or(ParseError::MissingProperty { number, property })?;

    let start: u32 = parse_number(&captures[2])?;
    let end: u32 = parse_number(&captures[3])?;
    if start == 0 || end <= start {
        return Err(ParseError::InvalidSpan {
            number,
            property,
            start,
            end,
        });
    }
    Ok((start, end))
}

fn parse_number<T: std::str::FromStr>(digits: &str) -> Result<T, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::InvalidNumber(digits.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridDimensions, Item, ItemId};
    use crate::output::derive_output;
    use insta::assert_compact_debug_snapshot;
    use rstest::rstest;

    #[test]
    fn test_recovers_generated_rectangles() {
        let rects = [
            Rectangle::new(1, 2, 1, 3),
            Rectangle::new(4, 5, 5, 5),
            Rectangle::new(3, 3, 2, 4),
        ];
        let items: Vec<_> = rects
            .iter()
            .enumerate()
            .map(|(i, rect)| Item::new(ItemId(i as u64), *rect))
            .collect();
        let options = OutputOptions::default();
        let output = derive_output(&GridDimensions::default(), &items, &options);

        let parsed = parse_item_rules(&output.css, &options).unwrap();

        assert_eq!(parsed.len(), 3);
        for (i, item) in parsed.iter().enumerate() {
            assert_eq!(item.number, i + 1);
            assert_eq!(item.rect, rects[i]);
        }
    }

    #[test]
    fn test_scenario_rule() {
        let css = ".item-1 {\n  grid-column: 1 / 4;\n  grid-row: 1 / 3;\n}";
        let parsed = parse_item_rules(css, &OutputOptions::default()).unwrap();
        assert_compact_debug_snapshot!(parsed[0].rect, @"Rectangle { start_row: 1, end_row: 2, start_col: 1, end_col: 3 }");
    }

    #[test]
    fn test_container_rule_is_skipped() {
        let css = ".grid-preview {\n  display: grid;\n  gap: 8px;\n}\n";
        assert_eq!(parse_item_rules(css, &OutputOptions::default()), Ok(vec![]));
    }

    #[test]
    fn test_sorted_by_number() {
        let css = ".item-2 { grid-column: 2 / 3; grid-row: 1 / 2; }\n.item-1 {\n  grid-column: 1 / 2;\n  grid-row: 1 / 2;\n}";
        let parsed = parse_item_rules(css, &OutputOptions::default()).unwrap();

        let numbers: Vec<_> = parsed.iter().map(|item| item.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(parsed[1].rect, Rectangle::new(1, 1, 2, 2));
    }

    #[test]
    fn test_longhand_properties_are_not_mistaken_for_spans() {
        let css = ".item-1 {\n  grid-column-start: 1 / 9;\n  grid-column: 2 / 4;\n  grid-row: 1 / 2;\n}";
        let parsed = parse_item_rules(css, &OutputOptions::default()).unwrap();
        assert_eq!(parsed[0].rect, Rectangle::new(1, 1, 2, 3));
    }

    #[test]
    fn test_missing_row_span() {
        let css = ".item-1 {\n  grid-column: 1 / 2;\n}";
        assert_eq!(
            parse_item_rules(css, &OutputOptions::default()),
            Err(ParseError::MissingProperty {
                number: 1,
                property: "grid-row"
            })
        );
    }

    #[test]
    fn test_empty_span_is_rejected() {
        let css = ".item-3 {\n  grid-column: 2 / 2;\n  grid-row: 1 / 2;\n}";
        assert_eq!(
            parse_item_rules(css, &OutputOptions::default()),
            Err(ParseError::InvalidSpan {
                number: 3,
                property: "grid-column",
                start: 2,
                end: 2
            })
        );
    }

    #[test]
    fn test_custom_prefix_ending_in_digit() {
        let options = OutputOptions {
            item_class_prefix: "c1".to_string(),
            ..OutputOptions::default()
        };
        let css = ".c12 {\n  grid-column: 1 / 2;\n  grid-row: 1 / 2;\n}";

        let parsed = parse_item_rules(css, &options).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].number, 2);
    }

    #[test]
    fn test_classes_that_only_resemble_items_are_skipped() {
        let css = ".xitem-1 { grid-column: 1 / 2; grid-row: 1 / 2; }\n.item-1a { grid-column: 1 / 2; grid-row: 1 / 2; }\n.item- { grid-column: 1 / 2; grid-row: 1 / 2; }";
        assert_eq!(parse_item_rules(css, &OutputOptions::default()), Ok(vec![]));
    }

    #[rstest]
    #[case("item-7", "item-", Some("7"))]
    #[case("item-07", "item-", Some("07"))]
    #[case("item-", "item-", None)]
    #[case("item-x1", "item-", None)]
    #[case("grid-preview", "item-", None)]
    fn test_item_number_suffix(
        #[case] class_name: &str,
        #[case] prefix: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(item_number_suffix(class_name, prefix), expected);
    }
}
