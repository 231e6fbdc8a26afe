use chrono::NaiveDate;
use serde::Serialize;

/// One (date, close) observation of the charted price history.
///
/// Chronologically ordered by the producing reader; consumed only for
/// reporting and charting, never by the prediction engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}
