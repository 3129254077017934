//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file pointing the API at `base_url`.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    temp_config_with(base_url, "")
}

/// Like [`temp_config`], with extra TOML appended verbatim.
pub fn temp_config_with(base_url: &str, extra: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[api]
base_url = "{}"
timeout_seconds = 5
connect_timeout_seconds = 2

[search]
debounce_ms = 20

[logging]
level = "warn"

{}
"#,
        base_url, extra
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
