use crate::domain::errors::PredictorError;
use crate::domain::prices::PricePoint;
use chrono::NaiveDate;
use std::path::Path;
use tracing::warn;

/// Reads the (date, close) price history used for charting.
///
/// The date and close columns are resolved from the header by name,
/// falling back to columns 0 and 1. Rows with a bad date or a
/// non-numeric price are skipped individually; only an unreadable source
/// aborts the read.
pub fn read_price_series(path: &Path) -> Result<Vec<PricePoint>, PredictorError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| PredictorError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| PredictorError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .clone();

    let date_col = find_column(&headers, "date").unwrap_or(0);
    let close_col = find_column(&headers, "close").unwrap_or(1);

    let mut series = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping unreadable price row: {}", e);
                continue;
            }
        };

        let date_field = record.get(date_col).unwrap_or("");
        let close_field = record.get(close_col).unwrap_or("");

        match (
            NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d"),
            close_field.trim().parse::<f64>(),
        ) {
            (Ok(date), Ok(close)) => series.push(PricePoint { date, close }),
            _ => {
                warn!(
                    line = record.position().map(|p| p.line()).unwrap_or(0),
                    "Skipping price row with invalid date or close"
                );
            }
        }
    }

    Ok(series)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}
