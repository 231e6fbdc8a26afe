use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds of the prediction pipeline.
///
/// Every kind surfaces as an explicit `Result` error at the call site;
/// nothing is retried automatically and nothing aborts the process.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("failed to load model {path:?}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("cannot read {path:?}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("expected {expected} features, got {actual}")]
    FeatureShape { expected: usize, actual: usize },

    #[error("feature column {column} is not numeric: {value:?}")]
    FeatureParse { column: usize, value: String },

    #[error("classification failed: {reason}")]
    Classification { reason: String },
}
