//! Dashboard configuration
//!
//! The backend base URL is read once at startup. The host page can inject it
//! via a `<meta>` tag or a `window.__USERSBOX_CONFIG__` object, or it can be
//! baked in at compile time through the `BACKEND_URL` environment variable.

use wasm_bindgen::JsCast;

/// Fallback when no other source yields a URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

const META_BACKEND_URL: &str = "usersbox:backend-url";
const META_VERSION: &str = "usersbox:version";
const JS_CONFIG_OBJECT: &str = "__USERSBOX_CONFIG__";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend base URL without the `/api` suffix
    pub backend_url: String,
    /// Version string injected by the host page
    pub version: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            version: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the browser (priority order):
    /// 1. `<meta name="usersbox:backend-url">` tag
    /// 2. `window.__USERSBOX_CONFIG__.backend_url`
    /// 3. `BACKEND_URL` at compile time
    /// 4. Current window origin
    pub fn load() -> Self {
        let document = web_sys::window().and_then(|w| w.document());

        let meta_url = document
            .as_ref()
            .and_then(|doc| get_meta_content(doc, META_BACKEND_URL));
        let version = document
            .as_ref()
            .and_then(|doc| get_meta_content(doc, META_VERSION));
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());

        let config = Self::resolve(
            [
                meta_url,
                get_js_config("backend_url"),
                option_env!("BACKEND_URL").map(str::to_string),
                origin,
            ],
            version,
        );
        tracing::info!(backend_url = %config.backend_url, "dashboard configuration loaded");
        config
    }

    /// Build a configuration from candidate URLs in priority order.
    ///
    /// Blank candidates are skipped and trailing slashes trimmed.
    pub fn resolve(
        candidates: impl IntoIterator<Item = Option<String>>,
        version: Option<String>,
    ) -> Self {
        let backend_url = candidates
            .into_iter()
            .flatten()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let version = version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            backend_url,
            version,
        }
    }

    /// Get the backend base URL
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

/// Get content from a <meta name="..."> tag
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a value from window.__USERSBOX_CONFIG__
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JS_CONFIG_OBJECT.into()).ok()?;

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
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert!(config.version.is_none());
    }

    #[test]
    fn test_first_non_blank_candidate_wins() {
        let config = DashboardConfig::resolve(
            [
                None,
                Some("   ".to_string()),
                Some("https://bot.example.com/".to_string()),
                Some("http://localhost:3000".to_string()),
            ],
            None,
        );
        assert_eq!(config.backend_url(), "https://bot.example.com");
    }

    #[test]
    fn test_falls_back_to_default() {
        let config = DashboardConfig::resolve([None, Some(String::new())], Some(" ".into()));
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert!(config.version.is_none());
    }

    #[test]
    fn test_version_is_trimmed() {
        let config = DashboardConfig::resolve([Some("http://a".into())], Some(" 1.2.0 ".into()));
        assert_eq!(config.version.as_deref(), Some("1.2.0"));
    }
}
