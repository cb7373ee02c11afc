use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Contact;

/// A registered purchase.
///
/// Orders are append-only: the product name and the total are captured at
/// purchase time and never revised, even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Product name as it read when the order was placed.
    pub name: String,
    pub qty: u32,
    /// `qty × unit price` frozen at purchase time.
    pub total: f64,
    /// Purchase instant, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Snapshot of the buyer.
    pub user: Contact,
}
