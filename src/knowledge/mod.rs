//! The static knowledge tables: reference ranges, critical thresholds, and
//! educational explanation text. Read-only, process-lifetime constants.

pub mod explanations;
pub mod reference;

pub use explanations::{ExplanationEntry, EXPLANATIONS, NORMAL_ADVICE, NORMAL_MEANING};
pub use reference::{ReferenceEntry, REFERENCE_RANGES};

#[cfg(test)]
mod tests {
    use super::*;

    /// The two tables must stay keyed by the same parameter set.
    #[test]
    fn every_reference_entry_has_an_explanation() {
        for entry in &REFERENCE_RANGES {
            assert!(
                explanations::lookup(entry.name).is_some(),
                "missing explanation for {}",
                entry.name
            );
        }
    }

    #[test]
    fn every_explanation_has_a_reference_entry() {
        for entry in &EXPLANATIONS {
            assert!(
                reference::lookup(entry.name).is_some(),
                "missing reference range for {}",
                entry.name
            );
        }
    }
}
