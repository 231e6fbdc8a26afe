//! Next-day stock direction prediction from a frozen boosted-tree model.
//!
//! The core surface is two calls: [`infrastructure::onnx_classifier::OnnxClassifier::load`]
//! to materialize the model artifact, and [`application::engine::predict`] to turn a
//! 60-feature vector into a [`domain::prediction::Prediction`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
