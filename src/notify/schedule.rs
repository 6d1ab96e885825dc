//! Activation instants and readiness.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::notify::types::OutputRecord;

/// Days between the event date and the activation instant.
pub const ACTIVATION_OFFSET_DAYS: u64 = 3;

/// Midnight UTC, [`ACTIVATION_OFFSET_DAYS`] after `date`.
///
/// Absent when there is no date or the result falls outside chrono's range.
pub fn activation_instant(date: Option<NaiveDate>) -> Option<DateTime<Utc>> {
    let target = date?.checked_add_days(Days::new(ACTIVATION_OFFSET_DAYS))?;
    Some(target.and_time(NaiveTime::MIN).and_utc())
}

/// Whether downstream action may start for this record at `now`.
///
/// Records without an activation instant are always ready.
pub fn is_ready(record: &OutputRecord, now: DateTime<Utc>) -> bool {
    record.activation_at.is_none_or(|at| at <= now)
}
