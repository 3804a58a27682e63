// src/daily_bar.rs

use serde::{Deserialize, Serialize};

/// One trading day's bar for one ticker, as decoded from the provider
/// payload. Numeric fields default to zero when the provider sends a
/// malformed value; a bar is only constructed when its date is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}
