use serde::{Deserialize, Serialize};

/// Where a classified value sits relative to its reference range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlagStatus {
    Low,
    Normal,
    High,
}

impl FlagStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FlagStatus::Low => "LOW",
            FlagStatus::Normal => "NORMAL",
            FlagStatus::High => "HIGH",
        }
    }
}

/// Which range the comparison used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RangeSource {
    /// Parsed from the report text next to the value.
    Document,
    /// Fallback from the built-in reference table.
    Reference,
}

/// A reference range in one of the three forms lab reports print.
///
/// Bounds are inclusive: a value equal to a bound classifies as Normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeBounds {
    /// `low - high`
    Span { low: f64, high: f64 },
    /// `< high` (desirable below)
    Below { high: f64 },
    /// `> low` (desirable above)
    Above { low: f64 },
}

impl RangeBounds {
    /// Classify a value against this range. Total: every finite value maps
    /// to exactly one status.
    pub fn classify(&self, value: f64) -> FlagStatus {
        match *self {
            RangeBounds::Span { low, high } => {
                if value < low {
                    FlagStatus::Low
                } else if value > high {
                    FlagStatus::High
                } else {
                    FlagStatus::Normal
                }
            }
            RangeBounds::Below { high } => {
                if value > high {
                    FlagStatus::High
                } else {
                    FlagStatus::Normal
                }
            }
            RangeBounds::Above { low } => {
                if value < low {
                    FlagStatus::Low
                } else {
                    FlagStatus::Normal
                }
            }
        }
    }

    /// Render the range the way a report would print it.
    pub fn display(&self, unit: &str) -> String {
        match *self {
            RangeBounds::Span { low, high } => format!("{low} - {high} {unit}"),
            RangeBounds::Below { high } => format!("< {high} {unit}"),
            RangeBounds::Above { low } => format!("> {low} {unit}"),
        }
    }
}

/// One lab value as pulled out of the report text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabParameter {
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// Reference range printed next to the value, when the report has one.
    pub document_range: Option<RangeBounds>,
}

/// A lab value compared against its reference range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedResult {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: FlagStatus,
    pub range: RangeBounds,
    pub range_source: RangeSource,
    /// Set when the value crosses a critical threshold (see knowledge table).
    pub critical: bool,
}

impl ClassifiedResult {
    pub fn display_value(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }

    pub fn display_range(&self) -> String {
        self.range.display(&self.unit)
    }
}
