//! Compiled extraction patterns, one per known lab parameter.
//!
//! Each pattern is an independent, individually testable unit; adding a
//! parameter means adding a knowledge-table entry, never touching the
//! extraction loop.

use std::sync::LazyLock;

use regex::Regex;

use crate::knowledge::reference::{ReferenceEntry, REFERENCE_RANGES};
use crate::models::RangeBounds;

/// How far past the matched value to scan for an inline reference range,
/// in bytes (clamped to a character boundary).
const RANGE_LOOKAHEAD: usize = 300;

static RE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.,]+)\s*[–\-]\s*([\d.,]+)").unwrap());
static RE_UPPER_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\s*([\d.,]+)").unwrap());
static RE_LOWER_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s*([\d.,]+)").unwrap());

/// The matcher for one parameter: recognizes `<name> : <value> <unit>`
/// with flexible separators, case-insensitively.
pub struct ParameterPattern {
    pub name: &'static str,
    pub unit: &'static str,
    value_re: Regex,
}

/// A raw value hit plus the text window that may hold its printed range.
pub struct ValueMatch<'t> {
    pub raw_value: &'t str,
    pub lookahead: &'t str,
}

impl ParameterPattern {
    fn compile(entry: &ReferenceEntry) -> Self {
        let pattern = format!(
            r"(?i){}\s*[:\s]+([\d.,]+)\s*{}",
            regex::escape(entry.name),
            regex::escape(entry.unit)
        );
        Self {
            name: entry.name,
            unit: entry.unit,
            // Patterns are assembled from escaped table literals.
            value_re: Regex::new(&pattern).unwrap(),
        }
    }

    /// First occurrence wins when a parameter is printed more than once.
    pub fn find<'t>(&self, text: &'t str) -> Option<ValueMatch<'t>> {
        let caps = self.value_re.captures(text)?;
        let raw_value = caps.get(1)?.as_str();
        let match_end = caps.get(0)?.end();

        let mut window_end = (match_end + RANGE_LOOKAHEAD).min(text.len());
        while !text.is_char_boundary(window_end) {
            window_end -= 1;
        }

        Some(ValueMatch {
            raw_value,
            lookahead: &text[match_end..window_end],
        })
    }
}

/// One compiled pattern per knowledge-table parameter.
pub static PARAMETER_PATTERNS: LazyLock<Vec<ParameterPattern>> =
    LazyLock::new(|| REFERENCE_RANGES.iter().map(ParameterPattern::compile).collect());

/// Parse a printed number, tolerating thousands separators and trailing
/// punctuation picked up by the capture (`45,000` or `10.2,`).
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim_end_matches(['.', ',']).replace(',', "");
    cleaned.parse().ok()
}

/// Parse an inline reference range out of the text following a value.
///
/// Recognizes `low-high` (hyphen or en-dash), `< bound`, and `> bound`,
/// in that precedence order. A matched form with unparseable or inverted
/// numbers is treated as absent so classification falls back to the
/// built-in table.
pub fn parse_inline_range(window: &str) -> Option<RangeBounds> {
    if let Some(caps) = RE_SPAN.captures(window) {
        let low = caps.get(1).and_then(|m| parse_number(m.as_str()));
        let high = caps.get(2).and_then(|m| parse_number(m.as_str()));
        if let (Some(low), Some(high)) = (low, high) {
            if low < high {
                return Some(RangeBounds::Span { low, high });
            }
        }
    }

    if let Some(caps) = RE_UPPER_ONLY.captures(window) {
        if let Some(high) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            return Some(RangeBounds::Below { high });
        }
    }

    if let Some(caps) = RE_LOWER_ONLY.captures(window) {
        if let Some(low) = caps.get(1).and_then(|m| parse_number(m.as_str())) {
            return Some(RangeBounds::Above { low });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static ParameterPattern {
        PARAMETER_PATTERNS
            .iter()
            .find(|p| p.name == name)
            .expect("known parameter")
    }

    #[test]
    fn one_pattern_per_reference_entry() {
        assert_eq!(PARAMETER_PATTERNS.len(), REFERENCE_RANGES.len());
    }

    #[test]
    fn matches_colon_separated_value() {
        let m = pattern("Hemoglobin")
            .find("Hemoglobin: 10.2 g/dL (13.0-17.0)")
            .unwrap();
        assert_eq!(m.raw_value, "10.2");
        assert!(m.lookahead.contains("13.0-17.0"));
    }

    #[test]
    fn matches_whitespace_separated_value_case_insensitively() {
        let m = pattern("Hemoglobin").find("HEMOGLOBIN  10.2 G/DL").unwrap();
        assert_eq!(m.raw_value, "10.2");
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "Hemoglobin: 10.2 g/dL ... Hemoglobin: 15.0 g/dL";
        let m = pattern("Hemoglobin").find(text).unwrap();
        assert_eq!(m.raw_value, "10.2");
    }

    #[test]
    fn requires_the_unit() {
        assert!(pattern("Hemoglobin").find("Hemoglobin: 10.2 mmol/L").is_none());
    }

    #[test]
    fn parenthesized_names_are_escaped() {
        let m = pattern("ALT (SGPT)").find("ALT (SGPT): 72 U/L").unwrap();
        assert_eq!(m.raw_value, "72");
    }

    #[test]
    fn micro_sign_units_match() {
        let m = pattern("Platelet Count")
            .find("Platelet Count: 45000 /µL (150000-450000)")
            .unwrap();
        assert_eq!(m.raw_value, "45000");
    }

    #[test]
    fn parse_number_handles_separators() {
        assert_eq!(parse_number("10.2"), Some(10.2));
        assert_eq!(parse_number("45,000"), Some(45000.0));
        assert_eq!(parse_number("10.2,"), Some(10.2));
        assert_eq!(parse_number("10.2."), Some(10.2));
        assert_eq!(parse_number("10.2.3"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn inline_span_range_parses() {
        assert_eq!(
            parse_inline_range("(13.0-17.0)"),
            Some(RangeBounds::Span {
                low: 13.0,
                high: 17.0
            })
        );
        assert_eq!(
            parse_inline_range("(150,000 – 450,000)"),
            Some(RangeBounds::Span {
                low: 150000.0,
                high: 450000.0
            })
        );
    }

    #[test]
    fn inline_single_bound_ranges_parse() {
        assert_eq!(
            parse_inline_range("(<100)"),
            Some(RangeBounds::Below { high: 100.0 })
        );
        assert_eq!(
            parse_inline_range("(> 40)"),
            Some(RangeBounds::Above { low: 40.0 })
        );
    }

    #[test]
    fn inverted_span_is_treated_as_absent() {
        assert_eq!(parse_inline_range("(17.0-13.0)"), None);
    }

    #[test]
    fn no_range_in_window_is_none() {
        assert_eq!(parse_inline_range("within normal limits"), None);
    }
}
