pub mod category;
pub mod lab;
pub mod report;

pub use category::TestCategory;
pub use lab::{ClassifiedResult, FlagStatus, LabParameter, RangeBounds, RangeSource};
pub use report::{CategorySection, Finding, ReportAnalysis};
