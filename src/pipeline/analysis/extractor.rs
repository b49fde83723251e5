use tracing::warn;

use super::patterns::{parse_inline_range, parse_number, ParameterPattern, PARAMETER_PATTERNS};
use crate::models::LabParameter;

/// Scan report text for every known lab parameter.
///
/// Runs over the full sanitized document text. Parameters that are absent
/// or malformed are omitted from the result, never errors; an empty vec is
/// the legitimate outcome for text with no recognizable values.
pub fn extract_parameters(text: &str) -> Vec<LabParameter> {
    PARAMETER_PATTERNS
        .iter()
        .filter_map(|pattern| extract_one(pattern, text))
        .collect()
}

fn extract_one(pattern: &ParameterPattern, text: &str) -> Option<LabParameter> {
    let hit = pattern.find(text)?;

    let value = match parse_number(hit.raw_value) {
        Some(v) => v,
        None => {
            warn!(
                parameter = pattern.name,
                raw = hit.raw_value,
                "unparseable value, skipping parameter"
            );
            return None;
        }
    };

    Some(LabParameter {
        name: pattern.name.to_string(),
        value,
        unit: pattern.unit.to_string(),
        document_range: parse_inline_range(hit.lookahead),
    })
}
