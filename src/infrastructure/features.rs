use crate::domain::errors::PredictorError;
use crate::domain::prediction::FEATURE_COUNT;
use csv::StringRecord;
use std::path::Path;
use tracing::debug;

/// Reads the most recent feature vector from a feature-table CSV.
///
/// The first record is a header and is discarded. Every data record is
/// read to locate the true last non-empty one; trailing blank records
/// never count. Exactly the first 60 fields of that record are parsed as
/// `f32` (a trailing 61st label column is ignored). The read is
/// all-or-nothing: 60 valid features, or an error and nothing.
pub fn read_latest_features(path: &Path) -> Result<Vec<f32>, PredictorError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| PredictorError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut last: Option<StringRecord> = None;
    for record in reader.records() {
        let record = record.map_err(|e| PredictorError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        last = Some(record);
    }

    let record = last.ok_or(PredictorError::FeatureShape {
        expected: FEATURE_COUNT,
        actual: 0,
    })?;

    debug!(
        line = record.position().map(|p| p.line()).unwrap_or(0),
        columns = record.len(),
        "selected last data record"
    );

    parse_features(&record)
}

fn parse_features(record: &StringRecord) -> Result<Vec<f32>, PredictorError> {
    if record.len() < FEATURE_COUNT {
        return Err(PredictorError::FeatureShape {
            expected: FEATURE_COUNT,
            actual: record.len(),
        });
    }

    record
        .iter()
        .take(FEATURE_COUNT)
        .enumerate()
        .map(|(column, field)| {
            field
                .trim()
                .parse::<f32>()
                .map_err(|_| PredictorError::FeatureParse {
                    column,
                    value: field.to_string(),
                })
        })
        .collect()
}
