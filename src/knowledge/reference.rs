//! Built-in reference ranges for the recognized lab parameters.
//!
//! One immutable table, compiled in. Used when a report prints a value
//! without its own reference range, and for the critical thresholds that
//! flag a value as needing immediate attention.

use crate::models::{RangeBounds, TestCategory};

/// Static range and threshold data for one lab parameter.
///
/// `critical_above` / `critical_below` mark values far enough outside the
/// range that the composed report tells the reader to contact a doctor
/// immediately.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub unit: &'static str,
    pub category: TestCategory,
    pub range: RangeBounds,
    pub critical_above: Option<f64>,
    pub critical_below: Option<f64>,
}

/// Every parameter the extractor recognizes, in canonical display order
/// within each category. Ranges follow common adult reference values;
/// single-bound entries mirror how labs print them (e.g. `LDL < 100`).
pub const REFERENCE_RANGES: [ReferenceEntry; 15] = [
    // Complete blood count
    ReferenceEntry {
        name: "Hemoglobin",
        unit: "g/dL",
        category: TestCategory::BloodCount,
        range: RangeBounds::Span {
            low: 13.0,
            high: 17.0,
        },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "RBC Count",
        unit: "million/µL",
        category: TestCategory::BloodCount,
        range: RangeBounds::Span { low: 4.5, high: 5.9 },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "WBC Count",
        unit: "/µL",
        category: TestCategory::BloodCount,
        range: RangeBounds::Span {
            low: 4000.0,
            high: 11000.0,
        },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "Platelet Count",
        unit: "/µL",
        category: TestCategory::BloodCount,
        range: RangeBounds::Span {
            low: 150000.0,
            high: 450000.0,
        },
        critical_above: None,
        critical_below: Some(50000.0),
    },
    ReferenceEntry {
        name: "Hematocrit",
        unit: "%",
        category: TestCategory::BloodCount,
        range: RangeBounds::Span {
            low: 38.3,
            high: 48.6,
        },
        critical_above: None,
        critical_below: None,
    },
    // Liver function
    ReferenceEntry {
        name: "Total Bilirubin",
        unit: "mg/dL",
        category: TestCategory::LiverFunction,
        range: RangeBounds::Span { low: 0.1, high: 1.2 },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "ALT (SGPT)",
        unit: "U/L",
        category: TestCategory::LiverFunction,
        range: RangeBounds::Span { low: 7.0, high: 56.0 },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "AST (SGOT)",
        unit: "U/L",
        category: TestCategory::LiverFunction,
        range: RangeBounds::Span {
            low: 10.0,
            high: 40.0,
        },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "Alkaline Phosphatase",
        unit: "U/L",
        category: TestCategory::LiverFunction,
        range: RangeBounds::Span {
            low: 44.0,
            high: 147.0,
        },
        critical_above: None,
        critical_below: None,
    },
    // Lipid profile
    ReferenceEntry {
        name: "Total Cholesterol",
        unit: "mg/dL",
        category: TestCategory::LipidProfile,
        range: RangeBounds::Below { high: 200.0 },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "LDL Cholesterol",
        unit: "mg/dL",
        category: TestCategory::LipidProfile,
        range: RangeBounds::Below { high: 100.0 },
        critical_above: Some(190.0),
        critical_below: None,
    },
    ReferenceEntry {
        name: "HDL Cholesterol",
        unit: "mg/dL",
        category: TestCategory::LipidProfile,
        range: RangeBounds::Above { low: 40.0 },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "Triglycerides",
        unit: "mg/dL",
        category: TestCategory::LipidProfile,
        range: RangeBounds::Below { high: 150.0 },
        critical_above: None,
        critical_below: None,
    },
    // Blood sugar
    ReferenceEntry {
        name: "Fasting Blood Sugar",
        unit: "mg/dL",
        category: TestCategory::BloodSugar,
        range: RangeBounds::Span {
            low: 70.0,
            high: 100.0,
        },
        critical_above: None,
        critical_below: None,
    },
    ReferenceEntry {
        name: "HbA1c",
        unit: "%",
        category: TestCategory::BloodSugar,
        range: RangeBounds::Span { low: 4.0, high: 5.6 },
        critical_above: None,
        critical_below: None,
    },
];

/// Look up a reference entry by parameter name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static ReferenceEntry> {
    REFERENCE_RANGES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Parameters belonging to one category, in canonical order.
pub fn parameters_in(category: TestCategory) -> impl Iterator<Item = &'static ReferenceEntry> {
    REFERENCE_RANGES
        .iter()
        .filter(move |entry| entry.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlagStatus;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("hemoglobin").is_some());
        assert!(lookup("HEMOGLOBIN").is_some());
        assert!(lookup("Creatinine").is_none());
    }

    #[test]
    fn span_ranges_are_ordered() {
        for entry in &REFERENCE_RANGES {
            if let RangeBounds::Span { low, high } = entry.range {
                assert!(low < high, "{} has an inverted range", entry.name);
            }
        }
    }

    #[test]
    fn every_category_has_parameters() {
        for category in TestCategory::DISPLAY_ORDER {
            assert!(
                parameters_in(category).count() > 0,
                "{category:?} has no parameters"
            );
        }
    }

    #[test]
    fn cbc_canonical_order_starts_with_hemoglobin() {
        let names: Vec<_> = parameters_in(TestCategory::BloodCount)
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Hemoglobin",
                "RBC Count",
                "WBC Count",
                "Platelet Count",
                "Hematocrit"
            ]
        );
    }

    #[test]
    fn critical_thresholds_sit_outside_the_range() {
        let ldl = lookup("LDL Cholesterol").unwrap();
        assert_eq!(ldl.range.classify(ldl.critical_above.unwrap()), FlagStatus::High);

        let platelets = lookup("Platelet Count").unwrap();
        assert_eq!(
            platelets.range.classify(platelets.critical_below.unwrap()),
            FlagStatus::Low
        );
    }

    #[test]
    fn table_has_fifteen_parameters() {
        assert_eq!(REFERENCE_RANGES.len(), 15);
    }
}
