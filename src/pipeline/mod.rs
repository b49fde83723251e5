//! The report-processing pipeline, one stage per submodule:
//! extraction → retrieval (chunk, embed, index, query) → analysis.
//!
//! `processor` is the single entry point that drives a full run.

pub mod analysis;
pub mod extraction;
pub mod processor;
pub mod retrieval;

pub use processor::{ProcessingError, ProcessingSummary, ReportOutcome, ReportProcessor};
