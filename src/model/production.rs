use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged manufacturing batch.
///
/// The bot only reads these for the trailing-week report; records are written
/// into the document by whoever runs production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub item: String,
    pub qty: u32,
    /// Batch instant, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}
