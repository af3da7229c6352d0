//! Expiry urgency classification.
//!
//! A date-only expiry denotes midnight UTC of that day. Day differences are
//! whole days rounded toward negative infinity, so an item expiring today is
//! already `-1` days away once the day has started.

use crate::model::{start_of_day, PantryItem};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Upper bound (inclusive) of the expiring-items window.
pub const EXPIRING_WINDOW_DAYS: i64 = 14;
/// Items at most this many days out are flagged as expiring soon (exclusive).
pub const EXPIRING_SOON_DAYS: i64 = 7;
/// How many expiring items the dashboard shows.
pub const EXPIRING_ITEMS_LIMIT: usize = 5;

/// Coarse expiry urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryBucket {
    /// Past its expiry date
    Expired,
    /// Fewer than 3 days left
    Critical,
    /// Fewer than 7 days left
    Warning,
    Safe,
}

impl ExpiryBucket {
    /// Bucket a whole-day difference.
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days < 3 {
            Self::Critical
        } else if days < EXPIRING_SOON_DAYS {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Safe => "safe",
        }
    }
}

impl std::fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// `floor((expiry - now) / 1 day)`.
#[must_use]
pub fn days_until(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let ms = (start_of_day(expiry) - now).num_milliseconds();
    ms.div_euclid(MS_PER_DAY)
}

/// Days left as shown next to an item: `ceil((expiry - now) / 1 day)`.
#[must_use]
pub fn days_until_display(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let ms = (start_of_day(expiry) - now).num_milliseconds();
    -(-ms).div_euclid(MS_PER_DAY)
}

#[must_use]
pub fn expiry_bucket(expiry: NaiveDate, now: DateTime<Utc>) -> ExpiryBucket {
    ExpiryBucket::from_days(days_until(expiry, now))
}

/// True iff `0 <= days_until < 7`.
#[must_use]
pub fn is_expiring_soon(expiry: NaiveDate, now: DateTime<Utc>) -> bool {
    (0..EXPIRING_SOON_DAYS).contains(&days_until(expiry, now))
}

/// Whether the expiry instant lies in `[now, now + 14 days]`.
#[must_use]
pub fn is_in_expiring_window(expiry: NaiveDate, now: DateTime<Utc>) -> bool {
    let at = start_of_day(expiry);
    at >= now && at <= now + Duration::days(EXPIRING_WINDOW_DAYS)
}

/// Items inside the expiring window, soonest first, capped to
/// [`EXPIRING_ITEMS_LIMIT`].
#[must_use]
pub fn expiring_items(items: &[PantryItem], now: DateTime<Utc>) -> Vec<PantryItem> {
    let mut expiring: Vec<PantryItem> = items
        .iter()
        .filter(|item| is_in_expiring_window(item.expiry_date, now))
        .cloned()
        .collect();
    expiring.sort_by_key(|item| item.expiry_date);
    expiring.truncate(EXPIRING_ITEMS_LIMIT);
    expiring
}

/// Size of the expiring window, without the display cap.
#[must_use]
pub fn expiring_soon_count(items: &[PantryItem], now: DateTime<Utc>) -> usize {
    items
        .iter()
        .filter(|item| is_in_expiring_window(item.expiry_date, now))
        .count()
}
