//! Application constants, model cache locations, and per-report configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Labsense";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Labsense/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Labsense")
}

/// Get the models directory (for ONNX embeddings)
pub fn models_dir() -> PathBuf {
    app_data_dir().join("models")
}

/// Get the embedding model directory (all-MiniLM-L6-v2)
pub fn embedding_model_dir() -> PathBuf {
    models_dir().join("all-MiniLM-L6-v2")
}

// ---------------------------------------------------------------------------
// Report configuration
// ---------------------------------------------------------------------------

/// Chunk size bounds accepted by [`ReportConfig::validate`], in characters.
pub const CHUNK_SIZE_RANGE: std::ops::RangeInclusive<usize> = 300..=1000;

/// Maximum chunk overlap accepted by [`ReportConfig::validate`], in characters.
pub const MAX_CHUNK_OVERLAP: usize = 200;

/// The focus query used for retrieval when the caller supplies none.
pub const DEFAULT_FOCUS_QUERY: &str = "medical test results with reference ranges";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("chunk size {0} outside accepted range {lo}..={hi}", lo = CHUNK_SIZE_RANGE.start(), hi = CHUNK_SIZE_RANGE.end())]
    ChunkSizeOutOfRange(usize),

    #[error("chunk overlap {overlap} must be below chunk size {chunk_size} and at most {max}", max = MAX_CHUNK_OVERLAP)]
    OverlapTooLarge { overlap: usize, chunk_size: usize },

    #[error("top_k must be at least 1")]
    ZeroTopK,
}

/// Tunable knobs for one report-processing run.
///
/// Defaults match the values the pipeline was calibrated with: 800-char
/// chunks with 100-char overlap and the 5 closest chunks retrieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Sliding-window chunk size in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks.
    pub chunk_overlap: usize,
    /// How many chunks retrieval returns.
    pub top_k: usize,
    /// Free-text focus for retrieval; [`DEFAULT_FOCUS_QUERY`] when `None`.
    pub focus: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chunk_size: 800,
            chunk_overlap: 100,
            top_k: 5,
            focus: None,
        }
    }
}

impl ReportConfig {
    /// Reject configurations the chunker cannot make progress with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !CHUNK_SIZE_RANGE.contains(&self.chunk_size) {
            return Err(ConfigError::ChunkSizeOutOfRange(self.chunk_size));
        }
        if self.chunk_overlap >= self.chunk_size || self.chunk_overlap > MAX_CHUNK_OVERLAP {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }
        if self.top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }
        Ok(())
    }

    /// The retrieval query: caller-supplied focus or the default.
    pub fn focus_query(&self) -> &str {
        self.focus.as_deref().unwrap_or(DEFAULT_FOCUS_QUERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Labsense"));
    }

    #[test]
    fn embedding_model_dir_under_models() {
        let dir = embedding_model_dir();
        assert!(dir.starts_with(models_dir()));
        assert!(dir.ends_with("all-MiniLM-L6-v2"));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ReportConfig::default().validate().is_ok());
    }

    #[test]
    fn default_focus_query_used_when_unset() {
        let config = ReportConfig::default();
        assert_eq!(config.focus_query(), DEFAULT_FOCUS_QUERY);

        let config = ReportConfig {
            focus: Some("cholesterol".into()),
            ..Default::default()
        };
        assert_eq!(config.focus_query(), "cholesterol");
    }

    #[test]
    fn chunk_size_bounds_enforced() {
        let too_small = ReportConfig {
            chunk_size: 299,
            chunk_overlap: 0,
            ..Default::default()
        };
        assert!(matches!(
            too_small.validate(),
            Err(ConfigError::ChunkSizeOutOfRange(299))
        ));

        let too_large = ReportConfig {
            chunk_size: 1001,
            ..Default::default()
        };
        assert!(too_large.validate().is_err());

        let edges = ReportConfig {
            chunk_size: 300,
            chunk_overlap: 0,
            ..Default::default()
        };
        assert!(edges.validate().is_ok());
    }

    #[test]
    fn overlap_must_stay_below_chunk_size() {
        let config = ReportConfig {
            chunk_size: 300,
            chunk_overlap: 300,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OverlapTooLarge { .. })
        ));
    }

    #[test]
    fn overlap_capped_at_200() {
        let config = ReportConfig {
            chunk_size: 1000,
            chunk_overlap: 201,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_top_k_rejected() {
        let config = ReportConfig {
            top_k: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTopK)));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ReportConfig {
            chunk_size: 500,
            chunk_overlap: 50,
            top_k: 3,
            focus: Some("liver enzymes".into()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ReportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.chunk_size, 500);
        assert_eq!(back.focus.as_deref(), Some("liver enzymes"));
    }
}
