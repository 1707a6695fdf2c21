//! Expiry Status Classification
//!
//! Maps an item's expiry date against a reference date into one of three
//! statuses. Comparison is date-only; time of day never enters into it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Items expiring within this many days count as `Warning`.
pub const WARNING_WINDOW_DAYS: i64 = 7;

/// Freshness of an item relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// More than a week of shelf life left
    Fresh,
    /// Expires today or within the warning window
    Warning,
    /// Expiry date is in the past
    Expired,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Fresh => "fresh",
            ItemStatus::Warning => "warning",
            ItemStatus::Expired => "expired",
        }
    }

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Fresh => "Fresh",
            ItemStatus::Warning => "Expiring soon",
            ItemStatus::Expired => "Expired",
        }
    }

    /// CSS class used by list rows and dashboard tables
    pub fn css_class(&self) -> &'static str {
        match self {
            ItemStatus::Fresh => "status-fresh",
            ItemStatus::Warning => "status-warning",
            ItemStatus::Expired => "status-expired",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ItemStatus::Fresh => "\u{2705}",
            ItemStatus::Warning => "\u{26a0}\u{fe0f}",
            ItemStatus::Expired => "\u{1f6a8}",
        }
    }
}

/// Signed number of days from `today` to `expiry`. Negative once expired.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Classify an expiry date against a reference date.
///
/// An item expiring today is still `Warning`, not `Expired`; one expiring
/// exactly `WARNING_WINDOW_DAYS` out is `Warning`, not `Fresh`.
pub fn classify(expiry: NaiveDate, today: NaiveDate) -> ItemStatus {
    let days = days_until(expiry, today);
    if days < 0 {
        ItemStatus::Expired
    } else if days <= WARNING_WINDOW_DAYS {
        ItemStatus::Warning
    } else {
        ItemStatus::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expired_iff_before_today() {
        let today = date(2025, 6, 15);
        assert_eq!(classify(date(2025, 6, 14), today), ItemStatus::Expired);
        assert_eq!(classify(date(2024, 12, 31), today), ItemStatus::Expired);
        // today itself is not expired
        assert_ne!(classify(today, today), ItemStatus::Expired);
    }

    #[test]
    fn test_today_is_warning() {
        let today = date(2025, 6, 15);
        assert_eq!(classify(today, today), ItemStatus::Warning);
    }

    #[test]
    fn test_seven_day_boundary_is_warning() {
        let today = date(2025, 6, 15);
        assert_eq!(classify(today + Duration::days(7), today), ItemStatus::Warning);
    }

    #[test]
    fn test_eight_days_out_is_fresh() {
        let today = date(2025, 6, 15);
        assert_eq!(classify(today + Duration::days(8), today), ItemStatus::Fresh);
    }

    #[test]
    fn test_warning_iff_within_window() {
        let today = date(2025, 6, 15);
        for days in 0..=30 {
            let status = classify(today + Duration::days(days), today);
            if days <= WARNING_WINDOW_DAYS {
                assert_eq!(status, ItemStatus::Warning, "day offset {}", days);
            } else {
                assert_eq!(status, ItemStatus::Fresh, "day offset {}", days);
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let today = date(2025, 6, 15);
        let expiry = date(2025, 6, 20);
        assert_eq!(classify(expiry, today), classify(expiry, today));
    }

    #[test]
    fn test_days_until_sign() {
        let today = date(2025, 6, 15);
        assert_eq!(days_until(date(2025, 6, 18), today), 3);
        assert_eq!(days_until(date(2025, 6, 14), today), -1);
        assert_eq!(days_until(today, today), 0);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(ItemStatus::Warning.as_str(), "warning");
        let json = serde_json::to_string(&ItemStatus::Expired).unwrap();
        assert_eq!(json, "\"expired\"");
        let back: ItemStatus = serde_json::from_str("\"fresh\"").unwrap();
        assert_eq!(back, ItemStatus::Fresh);
    }
}
