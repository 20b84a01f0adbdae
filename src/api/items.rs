//! Item Endpoints

use serde_json::Value;

use super::{ApiClient, Method, RequestOptions};
use crate::error::RequestError;
use crate::models::{Item, ItemPayload};

pub async fn list_items(api: &ApiClient) -> Result<Vec<Item>, RequestError> {
    api.call_as("/api/items", RequestOptions::default()).await
}

pub async fn create_item(api: &ApiClient, payload: &ItemPayload) -> Result<Value, RequestError> {
    api.call("/api/items", RequestOptions::new(Method::Post).json(payload)?)
        .await
}

pub async fn update_item(api: &ApiClient, id: u32, payload: &ItemPayload) -> Result<Value, RequestError> {
    let path = format!("/api/items/{}", id);
    api.call(&path, RequestOptions::new(Method::Put).json(payload)?).await
}

pub async fn delete_item(api: &ApiClient, id: u32) -> Result<(), RequestError> {
    let path = format!("/api/items/{}", id);
    api.call(&path, RequestOptions::new(Method::Delete)).await?;
    Ok(())
}

/// Ask the backend to check an item now; the result arrives on a later load
pub async fn check_item(api: &ApiClient, id: u32) -> Result<(), RequestError> {
    let path = format!("/api/items/{}/check", id);
    api.call(&path, RequestOptions::new(Method::Post)).await?;
    Ok(())
}
