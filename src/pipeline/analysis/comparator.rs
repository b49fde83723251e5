use tracing::warn;

use crate::knowledge::reference;
use crate::models::{ClassifiedResult, LabParameter, RangeSource};

/// Compare an extracted parameter against its reference range.
///
/// The range printed in the report wins when present and well-formed;
/// otherwise the built-in table range is used. Critical thresholds always
/// come from the table, independent of which range classified the value.
pub fn classify(param: &LabParameter) -> Option<ClassifiedResult> {
    let entry = reference::lookup(&param.name);

    let (range, range_source) = match (param.document_range, entry) {
        (Some(range), _) => (range, RangeSource::Document),
        (None, Some(entry)) => (entry.range, RangeSource::Reference),
        (None, None) => {
            warn!(parameter = %param.name, "no range available, skipping");
            return None;
        }
    };

    let critical = entry.is_some_and(|e| {
        e.critical_above.is_some_and(|t| param.value > t)
            || e.critical_below.is_some_and(|t| param.value < t)
    });

    Some(ClassifiedResult {
        name: param.name.clone(),
        value: param.value,
        unit: param.unit.clone(),
        status: range.classify(param.value),
        range,
        range_source,
        critical,
    })
}
