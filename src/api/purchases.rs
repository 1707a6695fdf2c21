//! Purchase List Calls

use super::{ApiClient, Result};
use crate::models::{PurchaseEntry, PurchasePayload};

pub async fn list_purchases(client: &ApiClient) -> Result<Vec<PurchaseEntry>> {
    client.get("/purchase-lists").await
}

pub async fn add_purchase(
    client: &ApiClient,
    item_name: &str,
    category_id: u32,
) -> Result<PurchaseEntry> {
    let body = PurchasePayload {
        item_name,
        category_id,
    };
    client.post("/purchase-lists", &body).await
}

/// Flip an entry to purchased. The server stamps the purchase time.
pub async fn mark_purchased(client: &ApiClient, id: u32) -> Result<()> {
    client.put_empty(&format!("/purchase-lists/{}", id)).await
}
