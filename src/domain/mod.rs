// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Prediction result types
pub mod prediction;

// Price history types
pub mod prices;
