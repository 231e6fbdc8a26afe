//! Configuration module for Stockcast.
//!
//! Settings come from environment variables (a `.env` file is honored at
//! the binary edge) with defaults that match the expected per-symbol data
//! layout; CLI flags override them.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Serialized model artifact consumed at inference time.
    pub model_path: PathBuf,
    /// Root of the per-symbol data folders.
    pub data_dir: PathBuf,
    /// Stock symbol whose folder is read.
    pub symbol: String,
    /// Number of recent sessions summarized from the price history.
    pub chart_days: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = PathBuf::from(
            env::var("MODEL_PATH").unwrap_or_else(|_| "data/model/stock_gbt.onnx".to_string()),
        );
        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
        let symbol = env::var("SYMBOL").unwrap_or_else(|_| "AAPL".to_string());

        let chart_days = env::var("CHART_DAYS")
            .unwrap_or_else(|_| "90".to_string())
            .parse::<usize>()
            .context("Invalid CHART_DAYS: must be a whole number of sessions")?;

        Ok(Self {
            model_path,
            data_dir,
            symbol,
            chart_days,
        })
    }

    /// Feature table for the configured symbol.
    pub fn features_path(&self) -> PathBuf {
        self.data_dir.join(&self.symbol).join("features.csv")
    }

    /// Price history for the configured symbol.
    pub fn prices_path(&self) -> PathBuf {
        self.data_dir.join(&self.symbol).join("prices.csv")
    }
}
