pub mod features;
pub mod onnx_classifier;
pub mod prices;

pub use onnx_classifier::OnnxClassifier;
