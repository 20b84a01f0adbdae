//! Email Endpoints

use serde_json::Value;

use super::{ApiClient, Method, RequestOptions};
use crate::error::RequestError;
use crate::models::{Email, EmailPayload};

pub async fn list_emails(api: &ApiClient) -> Result<Vec<Email>, RequestError> {
    api.call_as("/api/emails", RequestOptions::default()).await
}

pub async fn create_email(api: &ApiClient, payload: &EmailPayload) -> Result<Value, RequestError> {
    api.call("/api/emails", RequestOptions::new(Method::Post).json(payload)?)
        .await
}

pub async fn delete_email(api: &ApiClient, id: u32) -> Result<(), RequestError> {
    let path = format!("/api/emails/{}", id);
    api.call(&path, RequestOptions::new(Method::Delete)).await?;
    Ok(())
}
