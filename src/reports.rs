//! Read-only aggregation over the catalog document.
//!
//! Everything here borrows from the document and computes on the fly; the
//! collections are small enough that nothing is cached. All calendar math is
//! UTC, matching the timestamps the store persists.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};

use crate::model::{CatalogDocument, Contact, Order, ProductionRecord};

/// How many orders the dashboard shows.
pub const RECENT_ORDERS_LIMIT: usize = 10;

/// Units and earnings accumulated since the start of the current month.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlySummary {
    pub units_sold: u64,
    pub earnings: f64,
}

/// First instant of the calendar month containing `now`, in UTC.
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    // with_day(1) only fails for dates no calendar produces
    let day_one = now.date_naive().with_day(1).unwrap_or_else(|| now.date_naive());
    Utc.from_utc_datetime(&day_one.and_time(NaiveTime::MIN))
}

/// Sums units and earnings over orders placed since the start of the month.
pub fn monthly_summary(document: &CatalogDocument, now: DateTime<Utc>) -> MonthlySummary {
    let since = start_of_month(now);
    document
        .orders
        .iter()
        .filter(|order| order.date >= since)
        .fold(MonthlySummary::default(), |mut summary, order| {
            summary.units_sold += u64::from(order.qty);
            summary.earnings += order.total;
            summary
        })
}

/// The last `limit` orders by insertion position, most recent first.
///
/// Selection ignores timestamps on purpose: a backdated order at the tail of
/// the list still counts as recent, because position is what records arrival.
pub fn recent_orders(document: &CatalogDocument, limit: usize) -> Vec<&Order> {
    document.orders.iter().rev().take(limit).collect()
}

/// One contact per distinct user id, in order of first appearance.
///
/// The first snapshot wins; later orders by the same user never update it.
pub fn unique_contacts(document: &CatalogDocument) -> Vec<&Contact> {
    let mut seen = HashSet::new();
    document
        .orders
        .iter()
        .map(|order| &order.user)
        .filter(|contact| seen.insert(contact.id))
        .collect()
}

/// Production records from the trailing seven days, in store order.
pub fn production_last_7_days(
    document: &CatalogDocument,
    now: DateTime<Utc>,
) -> Vec<&ProductionRecord> {
    let since = now - Duration::days(7);
    document
        .production
        .iter()
        .filter(|record| record.date >= since)
        .collect()
}
