use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::TestCategory;
use super::lab::ClassifiedResult;

/// One classified value merged with its educational text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub result: ClassifiedResult,
    /// What this test measures.
    pub what_it_is: String,
    /// What the observed status means, matched to low/high/normal.
    pub meaning: String,
    /// Suggested next step, matched to low/high/normal.
    pub advice: String,
}

/// All findings for one test panel, in canonical parameter order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: TestCategory,
    pub title: String,
    pub findings: Vec<Finding>,
}

/// The composed output for one report run.
///
/// Parameters the report did not contain are absent, never errors. An
/// analysis with zero findings is the explicit "no parameters found"
/// outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub report_id: Uuid,
    pub analyzed_at: NaiveDateTime,
    /// Non-empty sections only, in fixed category display order.
    pub sections: Vec<CategorySection>,
    /// Human-readable descriptions of values past a critical threshold.
    pub urgent_findings: Vec<String>,
    pub total_findings: usize,
}

impl ReportAnalysis {
    /// True when no known parameter was recognized in the report.
    pub fn is_empty(&self) -> bool {
        self.total_findings == 0
    }
}
