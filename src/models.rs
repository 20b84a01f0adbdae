//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Deserializer, Serialize};

/// Tracked item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub rule_pattern: String,
    pub rule_count: i64,
    /// `None` while a check is pending or before the first check
    #[serde(default, deserialize_with = "flag")]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub last_checked: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Item {
    pub fn availability(&self) -> Availability {
        Availability::from(self.is_available)
    }
}

/// Notification address (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: u32,
    pub email: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// SQLite BOOLEAN columns arrive as `0`/`1`; accept those and real booleans
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Flag>::deserialize(deserializer)?.map(|value| match value {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    }))
}

/// Snapshot of the backend tracker process
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerStatus {
    pub running: bool,
    pub check_interval: u64,
}

/// Body for `POST /api/items` and `PUT /api/items/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub url: String,
    pub rule_pattern: String,
    pub rule_count: i64,
}

/// Body for `POST /api/emails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub email: String,
}

/// Tri-state availability of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Checking,
    Available,
    OutOfStock,
}

impl From<Option<bool>> for Availability {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Availability::Checking,
            Some(true) => Availability::Available,
            Some(false) => Availability::OutOfStock,
        }
    }
}

impl Availability {
    /// CSS modifier used on the badge
    pub fn css_class(self) -> &'static str {
        match self {
            Availability::Checking => "checking",
            Availability::Available => "available",
            Availability::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Checking => "Checking...",
            Availability::Available => "Available",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}
