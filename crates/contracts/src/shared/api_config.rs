//! API base URL resolution
//!
//! Единая точка получения базового адреса backend API. Every call site in the
//! frontend goes through [`ApiConfig`], so the host is never hardcoded twice.
//!
//! Priority:
//! 1. runtime override (saved from the Settings screen)
//! 2. build-time `SALESHUB_API_URL`
//! 3. the page location with [`DEFAULT_API_PORT`]

use serde::{Deserialize, Serialize};

/// Port the sales API listens on when nothing else is configured.
pub const DEFAULT_API_PORT: u16 = 5001;

/// Storage key for the runtime base URL override.
pub const API_BASE_STORAGE_KEY: &str = "saleshub_api_base";

/// Where the resolved base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiBaseSource {
    Override,
    BuildEnv,
    PageLocation,
}

impl ApiBaseSource {
    pub fn label(&self) -> &'static str {
        match self {
            ApiBaseSource::Override => "Saved override",
            ApiBaseSource::BuildEnv => "Build-time SALESHUB_API_URL",
            ApiBaseSource::PageLocation => "Page host",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base: String,
    pub source: ApiBaseSource,
}

/// Protocol and hostname of the page that hosts the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// e.g. `"https:"` (as returned by `window.location.protocol`)
    pub protocol: String,
    pub hostname: String,
}

impl Default for PageLocation {
    fn default() -> Self {
        Self {
            protocol: "http:".to_string(),
            hostname: "127.0.0.1".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn resolve(
        runtime_override: Option<&str>,
        build_env: Option<&str>,
        location: Option<PageLocation>,
    ) -> Self {
        if let Some(base) = non_blank(runtime_override) {
            return Self {
                base: normalize_base(base),
                source: ApiBaseSource::Override,
            };
        }
        if let Some(base) = non_blank(build_env) {
            return Self {
                base: normalize_base(base),
                source: ApiBaseSource::BuildEnv,
            };
        }
        let location = location.unwrap_or_default();
        Self {
            base: format!(
                "{}//{}:{}",
                location.protocol, location.hostname, DEFAULT_API_PORT
            ),
            source: ApiBaseSource::PageLocation,
        }
    }

    /// Join an API path (`"/api/orders"` or `"api/orders"`) onto the base.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Option<PageLocation> {
        Some(PageLocation {
            protocol: "https:".into(),
            hostname: "sales.example.com".into(),
        })
    }

    #[test]
    fn override_wins() {
        let cfg = ApiConfig::resolve(Some("http://10.0.0.5:8080/"), Some("http://env"), location());
        assert_eq!(cfg.base, "http://10.0.0.5:8080");
        assert_eq!(cfg.source, ApiBaseSource::Override);
    }

    #[test]
    fn build_env_used_when_no_override() {
        let cfg = ApiConfig::resolve(Some("   "), Some("http://api.internal"), location());
        assert_eq!(cfg.base, "http://api.internal");
        assert_eq!(cfg.source, ApiBaseSource::BuildEnv);
    }

    #[test]
    fn falls_back_to_page_location() {
        let cfg = ApiConfig::resolve(None, None, location());
        assert_eq!(cfg.base, "https://sales.example.com:5001");
        assert_eq!(cfg.source, ApiBaseSource::PageLocation);

        let cfg = ApiConfig::resolve(None, None, None);
        assert_eq!(cfg.base, "http://127.0.0.1:5001");
    }

    #[test]
    fn url_joins_with_single_slash() {
        let cfg = ApiConfig::resolve(Some("http://host:5001/"), None, None);
        assert_eq!(cfg.url("/api/orders"), "http://host:5001/api/orders");
        assert_eq!(cfg.url("api/orders/7"), "http://host:5001/api/orders/7");
    }
}
