use serde::{Deserialize, Serialize};

/// Fixed test panels a lab parameter can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    BloodCount,
    LiverFunction,
    LipidProfile,
    BloodSugar,
}

impl TestCategory {
    /// Display order for composed reports. Fixed regardless of which
    /// parameters were actually found.
    pub const DISPLAY_ORDER: [TestCategory; 4] = [
        TestCategory::BloodCount,
        TestCategory::LiverFunction,
        TestCategory::LipidProfile,
        TestCategory::BloodSugar,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TestCategory::BloodCount => "Blood Count Findings (CBC)",
            TestCategory::LiverFunction => "Liver Function Tests (LFT)",
            TestCategory::LipidProfile => "Cholesterol & Lipid Profile",
            TestCategory::BloodSugar => "Blood Sugar (Diabetes Screening)",
        }
    }
}
