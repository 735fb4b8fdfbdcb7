//! UI Configuration
//!
//! Selectors and messages the page behaviors bind to. Every field defaults
//! to the markup the admin templates render, so an empty config is valid.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Attribute on `<body>` holding a JSON `UiConfig`
pub const CONFIG_ATTRIBUTE: &str = "data-ui-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Slug source input
    pub title: String,
    /// Slug target input
    pub alias: String,
    /// Body field, focused when pre-filled
    pub body: String,
    /// Markdown preview container for the body field
    pub body_preview: String,
    /// Elements that ask before running their default action
    pub confirm: String,
    pub confirm_message: String,
    /// Autocomplete wrappers
    pub typeahead: String,
    /// Only wrappers containing this get the display fix
    pub typeahead_marker: String,
    /// Master checkbox
    pub select_all: String,
    /// Item checkboxes
    pub item_select: String,
    /// Toolbar shown while anything is selected
    pub toolbar: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "#title".to_string(),
            alias: "#alias".to_string(),
            body: "#body".to_string(),
            body_preview: "#body-preview".to_string(),
            confirm: ".confirm".to_string(),
            confirm_message: "Are you sure?".to_string(),
            typeahead: "span.twitter-typeahead".to_string(),
            typeahead_marker: "#image".to_string(),
            select_all: "#select_all".to_string(),
            item_select: ".ctrl-item-select".to_string(),
            toolbar: ".on-check".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse from the JSON stored in the body attribute
    pub fn from_json(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Convert an object handed over from JavaScript
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Read the config from `<body data-ui-config>`, falling back to defaults
    pub fn from_document(doc: &web_sys::Document) -> Self {
        let raw = doc
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
            .unwrap_or_default();

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] Invalid {}: {}, using defaults", CONFIG_ATTRIBUTE, e).into());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(UiConfig::from_json("").unwrap(), UiConfig::default());
        assert_eq!(UiConfig::from_json("  ").unwrap(), UiConfig::default());
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_json(r##"{"title": "#post-title", "confirm_message": "Delete?"}"##).unwrap();
        assert_eq!(config.title, "#post-title");
        assert_eq!(config.confirm_message, "Delete?");
        assert_eq!(config.alias, "#alias");
        assert_eq!(config.toolbar, ".on-check");
    }

    #[test]
    fn test_invalid_json() {
        assert!(UiConfig::from_json("{title:").is_err());
        assert!(UiConfig::from_json(r#"{"title": 5}"#).is_err());
    }

    #[test]
    fn test_selector_overrides_kept_verbatim() {
        let config = UiConfig::from_json(r#"{"item_select": "input.row, tr > .pick"}"#).unwrap();
        assert_eq!(config.item_select, "input.row, tr > .pick");
        assert_eq!(config.select_all, "#select_all");
    }
}
