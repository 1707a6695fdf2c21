//! Category Calls
//!
//! The API offers list and create only; there is no category update or
//! delete endpoint.

use super::{ApiClient, Result};
use crate::models::{Category, CategoryPayload};

pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>> {
    client.get("/categories").await
}

pub async fn create_category(
    client: &ApiClient,
    name: &str,
    description: Option<&str>,
) -> Result<Category> {
    let body = CategoryPayload {
        category_name: name,
        description,
    };
    client.post("/categories", &body).await
}
