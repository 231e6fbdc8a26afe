use crate::domain::errors::PredictorError;
use crate::domain::prediction::CLASS_COUNT;

/// Narrow capability interface over the classifier backend.
///
/// The prediction engine only ever needs "60 floats in, 3 class
/// probabilities out", so this is the whole seam: the real ONNX-backed
/// handle lives in `infrastructure`, and tests run against a stub.
pub trait Classifier: Send + Sync {
    /// Raw class probabilities in the fixed order {down, hold, up}.
    ///
    /// Callers must have validated the feature width; an unloaded or
    /// broken backend reports `PredictorError::Classification`.
    fn classify(&self, features: &[f32]) -> Result<[f32; CLASS_COUNT], PredictorError>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}
