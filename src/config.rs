//! Console Configuration
//!
//! Read once at startup from the `window.__ADMINUI_CONFIG__` object the
//! hosting page may define; every field is optional.

use std::str::FromStr;

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::notes::DropDirection;

/// Global the hosting page can set before the bundle loads
const CONFIG_GLOBAL: &str = "__ADMINUI_CONFIG__";

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Origin of the admin API, e.g. `https://adminui.example.com`
    pub api_base: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Side the notes dropdown opens towards
    pub notes_drop: DropDirection,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: "info".to_string(),
            notes_drop: DropDirection::Left,
        }
    }
}

impl AdminConfig {
    /// Load from the page global, falling back to defaults. An empty
    /// `api_base` becomes the page origin.
    pub fn load() -> Self {
        let window = leptos::prelude::window();
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);

        let mut config = if raw.is_undefined() || raw.is_null() {
            Self::default()
        } else {
            match serde_wasm_bindgen::from_value::<AdminConfig>(raw) {
                Ok(config) => config,
                Err(e) => {
                    // Logger is not up yet; the console is the only sink.
                    web_sys::console::warn_1(&format!("[CONFIG] ignoring {}: {}", CONFIG_GLOBAL, e).into());
                    Self::default()
                }
            }
        };

        if config.api_base.is_empty() {
            config.api_base = window.location().origin().unwrap_or_default();
        }
        config
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Join `segments` onto `{api_base}/_`, escaping each segment
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.api_base.trim_end_matches('/').to_string();
        url.push_str("/_");
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> AdminConfig {
        AdminConfig {
            api_base: base.to_string(),
            ..AdminConfig::default()
        }
    }

    #[test]
    fn test_url_joins_segments() {
        let cfg = config("https://admin.example.com/");
        assert_eq!(
            cfg.url(&["servers", "564d-aa", "reboot"]),
            "https://admin.example.com/_/servers/564d-aa/reboot"
        );
    }

    #[test]
    fn test_url_escapes_segments() {
        let cfg = config("http://localhost:8080");
        assert_eq!(cfg.url(&["notes", "a/b c"]), "http://localhost:8080/_/notes/a%2Fb%20c");
        // MAC addresses stay readable
        assert_eq!(cfg.url(&["nics", "90:b8:d0:2a:3c:01"]), "http://localhost:8080/_/nics/90:b8:d0:2a:3c:01");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: AdminConfig = serde_json::from_str(r#"{"notes_drop":"right"}"#).unwrap();
        assert_eq!(cfg.notes_drop, DropDirection::Right);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.api_base.is_empty());
    }

    #[test]
    fn test_level_filter() {
        let mut cfg = AdminConfig::default();
        cfg.log_level = "debug".to_string();
        assert_eq!(cfg.level_filter(), LevelFilter::Debug);
        cfg.log_level = "loud".to_string();
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
    }
}
