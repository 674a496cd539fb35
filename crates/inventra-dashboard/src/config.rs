//! Dashboard configuration
//!
//! The server hosting the WASM bundle can inject the API origin via a
//! `<meta>` tag or a `window.__INVENTRA_CONFIG__` object; otherwise the
//! current window origin is used.

use wasm_bindgen::JsCast;

/// Fixed base path of the asset-management REST API.
pub const API_BASE_PATH: &str = "/api/v1";

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// API origin (e.g. "http://localhost:8080"). Empty means current origin.
    pub api_url: String,
    /// Backend version, when injected by the server.
    pub version: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            version: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from various sources (priority order):
    /// 1. `<meta name="inventra:api-url">` tag (server-injected)
    /// 2. `window.__INVENTRA_CONFIG__` object (JavaScript injection)
    /// 3. Current window origin (default)
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(api_url) = get_meta_content(&document, "inventra:api-url") {
                if !api_url.is_empty() {
                    config.api_url = api_url;
                }
            }

            if let Some(version) = get_meta_content(&document, "inventra:version") {
                if !version.is_empty() {
                    config.version = Some(version);
                }
            }
        }

        if config.api_url.is_empty() {
            if let Some(url) = get_js_config("api_url") {
                config.api_url = url;
            }
        }

        if config.api_url.is_empty() {
            config.api_url = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:8080".to_string());
        }

        config
    }

    /// Full base URL of the REST API, origin plus `/api/v1`.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.api_url, API_BASE_PATH)
    }
}

/// Get content from a `<meta name="...">` tag
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a value from `window.__INVENTRA_CONFIG__`
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__INVENTRA_CONFIG__".into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&config, &key.into()).ok()?;
    value.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert!(config.api_url.is_empty());
        assert!(config.version.is_none());
    }

    #[test]
    fn test_api_base_joins_fixed_path() {
        let config = DashboardConfig {
            api_url: "http://localhost:8080".into(),
            version: None,
        };
        assert_eq!(config.api_base(), "http://localhost:8080/api/v1");
    }
}
