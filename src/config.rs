//! Runtime Configuration
//!
//! Read once at startup from an optional `window.STOCK_TRACKER_CONFIG`
//! object; every field falls back to its default.

use std::time::Duration;

use serde::Deserialize;
use wasm_bindgen::JsValue;

const GLOBAL_NAME: &str = "STOCK_TRACKER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub poll_interval_secs: u32,
    pub notification_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_secs: 5,
            notification_timeout_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<AppConfig>(value) {
            Ok(config) => config.normalized(),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed {}", GLOBAL_NAME);
                Self::default()
            }
        }
    }

    pub fn normalized(mut self) -> Self {
        self.poll_interval_secs = self.poll_interval_secs.max(1);
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.poll_interval_secs))
    }
}
