use crate::domain::errors::PredictorError;
use crate::domain::ports::Classifier;
use crate::domain::prediction::{Prediction, FEATURE_COUNT};
use tracing::debug;

/// Turns a feature vector into a structured prediction.
///
/// The shape check runs before anything touches the model: a malformed
/// vector is never forwarded. Classifier failures propagate as
/// `Classification`, distinct from the shape error.
pub fn predict(
    classifier: &dyn Classifier,
    features: &[f32],
) -> Result<Prediction, PredictorError> {
    if features.len() != FEATURE_COUNT {
        return Err(PredictorError::FeatureShape {
            expected: FEATURE_COUNT,
            actual: features.len(),
        });
    }

    let probs = classifier.classify(features)?;
    debug!(
        backend = classifier.name(),
        down = probs[0],
        hold = probs[1],
        up = probs[2],
        "raw class probabilities"
    );

    Ok(Prediction::from_probabilities(probs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{Direction, CLASS_COUNT};

    struct StubClassifier {
        probs: [f32; CLASS_COUNT],
    }

    impl Classifier for StubClassifier {
        fn classify(&self, _features: &[f32]) -> Result<[f32; CLASS_COUNT], PredictorError> {
            Ok(self.probs)
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn classify(&self, _features: &[f32]) -> Result<[f32; CLASS_COUNT], PredictorError> {
            Err(PredictorError::Classification {
                reason: "backend down".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_rejects_short_vector_before_classify() {
        let stub = StubClassifier {
            probs: [0.1, 0.1, 0.8],
        };
        let err = predict(&stub, &vec![1.0; 59]).unwrap_err();
        assert!(matches!(
            err,
            PredictorError::FeatureShape {
                expected: 60,
                actual: 59
            }
        ));
    }

    #[test]
    fn test_rejects_long_vector() {
        let stub = StubClassifier {
            probs: [0.1, 0.1, 0.8],
        };
        let err = predict(&stub, &vec![1.0; 61]).unwrap_err();
        assert!(matches!(err, PredictorError::FeatureShape { actual: 61, .. }));
    }

    #[test]
    fn test_maps_argmax_to_signed_direction() {
        let stub = StubClassifier {
            probs: [0.10, 0.10, 0.80],
        };
        let prediction = predict(&stub, &vec![0.0; 60]).unwrap();
        assert_eq!(prediction.direction, Direction::Up);
        assert_eq!(prediction.direction.signed(), 1);
        assert!((prediction.confidence - 0.80).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tie_break_favors_down() {
        let stub = StubClassifier {
            probs: [0.34, 0.34, 0.32],
        };
        let prediction = predict(&stub, &vec![0.0; 60]).unwrap();
        assert_eq!(prediction.direction, Direction::Down);
        assert_eq!(prediction.direction.signed(), -1);
    }

    #[test]
    fn test_classifier_failure_propagates() {
        let err = predict(&FailingClassifier, &vec![0.0; 60]).unwrap_err();
        assert!(matches!(err, PredictorError::Classification { .. }));
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let stub = StubClassifier {
            probs: [0.82, 0.10, 0.08],
        };
        let features = vec![0.5; 60];
        let first = predict(&stub, &features).unwrap();
        let second = predict(&stub, &features).unwrap();
        assert_eq!(first.direction, second.direction);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.direction.signed(), -1);
    }
}
