use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Records API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every entity path is appended to (e.g., "http://localhost:3000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Server-side search settings shared by every search binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed term is sent to the server.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Response field holding the result list.
    #[serde(default = "default_result_key")]
    pub result_key: String,
}

/// List view defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Number of page buttons rendered, ellipses included.
    #[serde(default = "default_max_page_buttons")]
    pub max_page_buttons: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_result_key() -> String {
    "items".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_max_page_buttons() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    /// Joins an entity path segment onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            result_key: default_result_key(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_page_buttons: default_max_page_buttons(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let api = ApiConfig {
            base_url: "http://localhost:3000/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.endpoint("/students"), "http://localhost:3000/api/students");
        assert_eq!(api.endpoint("majors"), "http://localhost:3000/api/majors");
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = toml::from_str(
            r#"
[search]
debounce_ms = 150
"#,
        )
        .unwrap();
        assert_eq!(config.search.debounce(), Duration::from_millis(150));
        assert_eq!(config.search.result_key, "items");
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.api, ApiConfig::default());
    }
}
