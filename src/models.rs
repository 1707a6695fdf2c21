//! Frontend Models
//!
//! Data structures matching the tracker API's wire format.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shelflife_core::Expires;

/// Tracked item (matches the `/items` responses)
///
/// The server also sends a `status` string; it is deliberately not modeled
/// here. Status is classified client-side on every render from the expiry
/// date and the current date, so a stale server copy can never leak into
/// the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: u32,
    pub user_id: u32,
    pub category_id: u32,
    pub item_name: String,
    pub expiry_date: NaiveDate,
    pub purchase_date: Option<NaiveDate>,
    pub auto_repurchase: bool,
}

impl Expires for Item {
    fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }
}

/// Category (matches the `/categories` responses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: u32,
    pub category_name: String,
    pub description: Option<String>,
}

/// Purchase list entry (matches the `/purchase-lists` responses)
///
/// Timestamps arrive as naive ISO datetimes without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEntry {
    pub purchase_id: u32,
    pub user_id: u32,
    pub item_name: String,
    pub category_id: u32,
    pub is_purchased: bool,
    pub added_at: NaiveDateTime,
    pub purchased_at: Option<NaiveDateTime>,
}

/// Kind of a derived notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Expiry within the warning window
    Warning,
    /// Expiry date already passed
    Expired,
    /// Anything else the server may emit
    #[serde(other)]
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "\u{26a0}\u{fe0f}",
            NotificationKind::Expired => "\u{1f6a8}",
            NotificationKind::Info => "\u{1f4e2}",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "alert-warning",
            NotificationKind::Expired => "alert-danger",
            NotificationKind::Info => "alert-info",
        }
    }

    /// User-facing message for this kind of notification
    pub fn message(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "An item is approaching its expiry date",
            NotificationKind::Expired => "An item has passed its expiry date",
            NotificationKind::Info => "You have a notification",
        }
    }
}

/// Notification (matches the `/notifications` responses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: u32,
    pub item_id: u32,
    pub user_id: u32,
    pub notification_type: NotificationKind,
    pub notification_date: NaiveDate,
    pub is_read: bool,
}

// ========================
// Request / Response Payloads
// ========================

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize)]
pub struct ItemPayload<'a> {
    pub category_id: u32,
    pub item_name: &'a str,
    pub expiry_date: NaiveDate,
    pub purchase_date: Option<NaiveDate>,
    pub auto_repurchase: bool,
}

#[derive(Serialize)]
pub struct CategoryPayload<'a> {
    pub category_name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
pub struct PurchasePayload<'a> {
    pub item_name: &'a str,
    pub category_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_format() {
        let json = r#"{
            "item_id": 3,
            "user_id": 1,
            "category_id": 2,
            "item_name": "Milk",
            "expiry_date": "2025-06-20",
            "status": "fresh",
            "purchase_date": null,
            "auto_repurchase": false
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_name, "Milk");
        assert_eq!(item.expiry_date.to_string(), "2025-06-20");
        assert_eq!(item.purchase_date, None);
        assert!(!item.auto_repurchase);
    }

    #[test]
    fn test_purchase_entry_naive_timestamps() {
        let json = r#"{
            "purchase_id": 7,
            "user_id": 1,
            "item_name": "Eggs",
            "category_id": 2,
            "is_purchased": true,
            "added_at": "2025-06-01T09:30:00",
            "purchased_at": "2025-06-02T18:00:00.123456"
        }"#;
        let entry: PurchaseEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_purchased);
        assert!(entry.purchased_at.is_some());
    }

    #[test]
    fn test_notification_kind_folds_unknown_to_info() {
        let known: NotificationKind = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(known, NotificationKind::Expired);
        let unknown: NotificationKind = serde_json::from_str("\"repurchase\"").unwrap();
        assert_eq!(unknown, NotificationKind::Info);
    }

    #[test]
    fn test_item_payload_serializes_dates_as_iso() {
        let payload = ItemPayload {
            category_id: 2,
            item_name: "Milk",
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            purchase_date: None,
            auto_repurchase: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["expiry_date"], "2025-06-20");
        assert_eq!(json["purchase_date"], serde_json::Value::Null);
    }
}
