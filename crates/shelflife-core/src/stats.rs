//! Dashboard Aggregates
//!
//! Counts and filtered sub-lists derived from a collection of expiring
//! records. Works over anything exposing an expiry date via [`Expires`].

use chrono::NaiveDate;

use crate::status::{classify, ItemStatus};

/// Anything with an expiry date the classifier can judge
pub trait Expires {
    fn expiry_date(&self) -> NaiveDate;
}

/// Dashboard headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    /// All items, regardless of status
    pub total: usize,
    /// Items classified `Warning`
    pub expiring: usize,
    /// Items classified `Expired`
    pub expired: usize,
}

impl StatusCounts {
    /// Tally a collection against a reference date.
    pub fn tally<T: Expires>(items: &[T], today: NaiveDate) -> Self {
        let mut counts = StatusCounts {
            total: items.len(),
            ..Default::default()
        };
        for item in items {
            match classify(item.expiry_date(), today) {
                ItemStatus::Warning => counts.expiring += 1,
                ItemStatus::Expired => counts.expired += 1,
                ItemStatus::Fresh => {}
            }
        }
        counts
    }
}

/// Items in the warning window, in collection order, at most `limit`.
pub fn upcoming<T: Expires>(items: &[T], today: NaiveDate, limit: usize) -> Vec<&T> {
    by_status(items, today, ItemStatus::Warning, limit)
}

/// Items already past their expiry date, in collection order, at most `limit`.
pub fn overdue<T: Expires>(items: &[T], today: NaiveDate, limit: usize) -> Vec<&T> {
    by_status(items, today, ItemStatus::Expired, limit)
}

fn by_status<T: Expires>(
    items: &[T],
    today: NaiveDate,
    status: ItemStatus,
    limit: usize,
) -> Vec<&T> {
    items
        .iter()
        .filter(|item| classify(item.expiry_date(), today) == status)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct Perishable {
        name: &'static str,
        expiry: NaiveDate,
    }

    impl Expires for Perishable {
        fn expiry_date(&self) -> NaiveDate {
            self.expiry
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn stock(offsets: &[(&'static str, i64)]) -> Vec<Perishable> {
        offsets
            .iter()
            .map(|(name, days)| Perishable {
                name,
                expiry: today() + Duration::days(*days),
            })
            .collect()
    }

    #[test]
    fn test_tally_mixed_collection() {
        // 3 expired, 2 warning, 5 fresh
        let items = stock(&[
            ("old milk", -3),
            ("old yogurt", -1),
            ("old ham", -10),
            ("cheese", 2),
            ("eggs", 7),
            ("rice", 30),
            ("pasta", 60),
            ("flour", 90),
            ("honey", 365),
            ("salt", 400),
        ]);
        let counts = StatusCounts::tally(&items, today());
        assert_eq!(counts.total, 10);
        assert_eq!(counts.expiring, 2);
        assert_eq!(counts.expired, 3);
    }

    #[test]
    fn test_tally_empty() {
        let items: Vec<Perishable> = Vec::new();
        assert_eq!(StatusCounts::tally(&items, today()), StatusCounts::default());
    }

    #[test]
    fn test_upcoming_preserves_order_and_limit() {
        let items = stock(&[("a", 1), ("b", 30), ("c", 3), ("d", 0), ("e", 5)]);
        let soon = upcoming(&items, today(), 2);
        let names: Vec<_> = soon.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_overdue_excludes_today() {
        let items = stock(&[("gone", -1), ("edge", 0), ("fine", 10)]);
        let late = overdue(&items, today(), 5);
        let names: Vec<_> = late.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["gone"]);
    }

    #[test]
    fn test_limit_zero_yields_nothing() {
        let items = stock(&[("a", 1), ("b", 2)]);
        assert!(upcoming(&items, today(), 0).is_empty());
    }
}
