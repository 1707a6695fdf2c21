//! Notification Calls
//!
//! Read-only; notifications are generated server-side from item statuses.

use super::{ApiClient, Result};
use crate::models::Notification;

pub async fn list_notifications(client: &ApiClient) -> Result<Vec<Notification>> {
    client.get("/notifications").await
}
