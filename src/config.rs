//! Widget Configuration
//!
//! Optional JSON on `<body data-todo-config='{...}'>`. Every field has a
//! default, so a partial object is fine.

use serde::Deserialize;
use todo_core::FilterMode;

/// Body attribute holding the JSON configuration
pub const CONFIG_ATTRIBUTE: &str = "data-todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading text
    pub title: String,
    /// Placeholder for the new-todo input
    pub placeholder: String,
    /// Start in dark mode
    pub dark_mode: bool,
    /// Initial filter: all, active or completed
    pub filter: String,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
    /// Console log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Todo".to_string(),
            placeholder: "Add new todo".to_string(),
            dark_mode: false,
            filter: FilterMode::All.to_string(),
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the body attribute; defaults when absent
    pub fn load() -> Result<Self, serde_json::Error> {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body())
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Unknown filter names fall back to all
    pub fn initial_filter(&self) -> FilterMode {
        self.filter.parse().unwrap_or_else(|e| {
            log::warn!("[CONFIG] {}", e);
            FilterMode::All
        })
    }

    /// Unknown level names fall back to info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
