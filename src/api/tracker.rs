//! Tracker Status Endpoint

use super::{ApiClient, RequestOptions};
use crate::error::RequestError;
use crate::models::TrackerStatus;

pub async fn tracker_status(api: &ApiClient) -> Result<TrackerStatus, RequestError> {
    api.call_as("/api/tracker/status", RequestOptions::default()).await
}
