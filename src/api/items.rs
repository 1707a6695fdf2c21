//! Item Calls

use super::{ApiClient, Result};
use crate::models::{Item, ItemPayload};

pub async fn list_items(client: &ApiClient) -> Result<Vec<Item>> {
    client.get("/items").await
}

pub async fn create_item(client: &ApiClient, payload: &ItemPayload<'_>) -> Result<Item> {
    client.post("/items", payload).await
}

pub async fn update_item(client: &ApiClient, id: u32, payload: &ItemPayload<'_>) -> Result<Item> {
    client.put(&format!("/items/{}", id), payload).await
}

pub async fn delete_item(client: &ApiClient, id: u32) -> Result<()> {
    client.delete(&format!("/items/{}", id)).await
}
