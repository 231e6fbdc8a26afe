use clap::Parser;
use std::path::PathBuf;
use stockcast::application::engine;
use stockcast::config::Config;
use stockcast::domain::prediction::Prediction;
use stockcast::domain::prices::PricePoint;
use stockcast::infrastructure::features::read_latest_features;
use stockcast::infrastructure::prices::read_price_series;
use stockcast::infrastructure::OnnxClassifier;
use tracing::{info, warn};

/// Next-session direction forecast for a configured stock symbol.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the serialized ONNX model
    #[arg(long)]
    model: Option<PathBuf>,

    /// Root directory of the per-symbol data folders
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Stock symbol to predict
    #[arg(long)]
    symbol: Option<String>,

    /// Number of recent sessions to summarize from the price history
    #[arg(long)]
    days: Option<usize>,

    /// Emit the prediction as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(symbol) = args.symbol {
        config.symbol = symbol;
    }
    if let Some(days) = args.days {
        config.chart_days = days;
    }

    info!(symbol = %config.symbol, "Predicting next session direction");

    let mut classifier = OnnxClassifier::new();
    classifier.load(&config.model_path)?;

    let features = read_latest_features(&config.features_path())?;
    info!(count = features.len(), "Features read from {:?}", config.features_path());

    let prediction = engine::predict(&classifier, &features)?;

    // Charting data is auxiliary: a missing price file downgrades the
    // report, it does not fail the prediction.
    let series = match read_price_series(&config.prices_path()) {
        Ok(series) => series,
        Err(e) => {
            warn!("Price history unavailable: {}", e);
            Vec::new()
        }
    };

    if args.json {
        print_json(&config, &prediction)?;
    } else {
        print_report(&config, &prediction, &series);
    }

    Ok(())
}

fn print_json(config: &Config, prediction: &Prediction) -> anyhow::Result<()> {
    let payload = serde_json::json!({
        "symbol": config.symbol,
        "direction": prediction.direction.signed(),
        "label": prediction.direction.label(),
        "prob_down": prediction.prob_down,
        "prob_hold": prediction.prob_hold,
        "prob_up": prediction.prob_up,
        "confidence": prediction.confidence,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_report(config: &Config, prediction: &Prediction, series: &[PricePoint]) {
    println!();
    println!("=== PREDICTION FOR THE NEXT SESSION ({}) ===", config.symbol);
    println!(
        "Direction: {} ({} - {})",
        prediction.direction.signed(),
        prediction.direction.label(),
        prediction.direction.description()
    );
    println!();
    println!("=== PROBABILITIES ===");
    println!("  DOWN:  {:.2}%", prediction.prob_down * 100.0);
    println!("  HOLD:  {:.2}%", prediction.prob_hold * 100.0);
    println!("  UP:    {:.2}%", prediction.prob_up * 100.0);
    println!("  Confidence: {:.2}%", prediction.confidence * 100.0);

    if series.is_empty() {
        return;
    }

    let window = &series[series.len().saturating_sub(config.chart_days.max(1))..];
    let first = &window[0];
    let last = &window[window.len() - 1];
    let change_pct = if first.close != 0.0 {
        (last.close - first.close) / first.close * 100.0
    } else {
        0.0
    };

    println!();
    println!("=== PRICE HISTORY ({} sessions) ===", window.len());
    println!("  {}  close {:.2}", first.date, first.close);
    println!("  {}  close {:.2}", last.date, last.close);
    println!("  Change: {:+.2}%", change_pct);
}
