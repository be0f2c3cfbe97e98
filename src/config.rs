//! Runtime Configuration
//!
//! Defaults suit the admin pages served by the backend itself. A page can
//! override them by defining `window.__CLINIC_ADMIN_CONFIG__` before the
//! WASM bundle loads.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::listing::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_WINDOW};

pub const CONFIG_GLOBAL: &str = "__CLINIC_ADMIN_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path, empty for same origin
    pub api_base: String,
    pub page_size: usize,
    /// How many page buttons the pager shows
    pub page_window: usize,
    /// Lifetime of a toast notification
    pub notification_ms: u32,
    /// `log` level name
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_PAGE_WINDOW,
            notification_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid __CLINIC_ADMIN_CONFIG__: {0}")]
    Invalid(String),
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
}

impl AppConfig {
    /// Defaults merged with the page-provided global, if any.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(crate::error::js_message(&e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()
    }

    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Zero { field: "page_size" });
        }
        if self.page_window == 0 {
            return Err(ConfigError::Zero { field: "page_window" });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_window, 5);
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base": "https://clinic.example", "notification_ms": 5000}"#).unwrap();
        assert_eq!(config.api_base, "https://clinic.example");
        assert_eq!(config.notification_ms, 5000);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = AppConfig::from_json(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { field: "page_size" }));
    }
}
