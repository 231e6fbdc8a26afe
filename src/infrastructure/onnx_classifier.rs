use crate::domain::errors::PredictorError;
use crate::domain::ports::Classifier;
use crate::domain::prediction::CLASS_COUNT;
use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Owner of the native classifier resource.
///
/// Holds at most one loaded ONNX session. `load` replaces any previous
/// session (the old one is dropped before the new artifact is opened),
/// and a failed load leaves the handle unusable rather than partially
/// initialized. The session's `run` needs exclusive access, hence the
/// internal mutex; one handle serves one caller at a time.
pub struct OnnxClassifier {
    session: Option<Mutex<Session>>,
    model_path: Option<PathBuf>,
}

impl OnnxClassifier {
    pub fn new() -> Self {
        Self {
            session: None,
            model_path: None,
        }
    }

    /// Materializes a usable session from the artifact at `path`.
    pub fn load(&mut self, path: &Path) -> Result<(), PredictorError> {
        // Release the previous session first so a reload never holds two
        // native handles at once.
        self.session = None;
        self.model_path = None;

        if !path.exists() {
            return Err(PredictorError::ModelLoad {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let mut builder = Session::builder().map_err(|e| PredictorError::ModelLoad {
            path: path.to_path_buf(),
            reason: format!("session builder failed: {}", e),
        })?;

        let session = builder
            .commit_from_file(path)
            .map_err(|e| PredictorError::ModelLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!("Loaded model from {:?}", path);
        self.session = Some(Mutex::new(session));
        self.model_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }
}

impl Default for OnnxClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, features: &[f32]) -> Result<[f32; CLASS_COUNT], PredictorError> {
        let session_mutex = self
            .session
            .as_ref()
            .ok_or_else(|| PredictorError::Classification {
                reason: "no model loaded".to_string(),
            })?;

        let mut session = session_mutex
            .lock()
            .map_err(|e| PredictorError::Classification {
                reason: format!("session lock failed: {}", e),
            })?;

        let shape = vec![1, features.len()];
        let input_value = ort::value::Value::from_array((shape.as_slice(), features.to_vec()))
            .map_err(|e| PredictorError::Classification {
                reason: format!("input tensor creation failed: {}", e),
            })?;

        let inputs = ort::inputs![input_value];

        let outputs = session
            .run(inputs)
            .map_err(|e| PredictorError::Classification {
                reason: e.to_string(),
            })?;

        // Boosted-tree exports usually emit a label tensor alongside the
        // probability tensor; the probabilities are the f32 output with
        // exactly one value per class.
        for (_, value) in outputs.iter() {
            if let Ok(tensor) = value.try_extract_tensor::<f32>() {
                let data = tensor.1;
                if data.len() == CLASS_COUNT {
                    return Ok([data[0], data[1], data[2]]);
                }
            }
        }

        Err(PredictorError::Classification {
            reason: format!("model produced no {}-class probability output", CLASS_COUNT),
        })
    }

    fn name(&self) -> &str {
        "ONNX Runtime (boosted trees)"
    }
}
