//! Labsense turns a lab-report PDF into a categorized, educational
//! breakdown of each recognized test value against its reference range.
//!
//! The pipeline is a single synchronous pass per report: PDF text
//! extraction → sanitization → sliding-window chunking → embedding →
//! flat vector index → focus-query retrieval → regex parameter
//! extraction → range comparison → composed explanation. The embedding
//! model is the only state shared across runs; it loads once per process.
//!
//! ```no_run
//! use labsense::config::ReportConfig;
//! use labsense::pipeline::ReportProcessor;
//!
//! let processor = ReportProcessor::with_defaults(ReportConfig::default())?;
//! let outcome = processor.process_file(std::path::Path::new("report.pdf"))?;
//! println!("{}", labsense::pipeline::analysis::render_markdown(&outcome.analysis));
//! # Ok::<(), labsense::pipeline::ProcessingError>(())
//! ```

pub mod config;
pub mod knowledge;
pub mod models;
pub mod pipeline;

pub use config::ReportConfig;
pub use models::{ClassifiedResult, FlagStatus, LabParameter, RangeBounds, ReportAnalysis};
pub use pipeline::{ProcessingError, ReportOutcome, ReportProcessor};
