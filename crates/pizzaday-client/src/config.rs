use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the pizza-day backend, no trailing slash.
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ClientConfig {
    /// Load from a TOML file, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(config_path: &str) -> Self {
        if Path::new(config_path).exists() {
            match fs::read_to_string(config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("Failed to parse config {config_path}: {e}"),
                },
                Err(e) => warn!("Failed to read config file {config_path}: {e}"),
            }
        }
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.server.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ClientConfig::load("/nonexistent/pizzaday.toml");
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert_eq!(config.server.timeout_seconds, 30);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbase_url = \"http://pizza.school:8080\"").unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap());
        assert_eq!(config.server.base_url, "http://pizza.school:8080");
        assert_eq!(config.server.timeout_seconds, 30);
    }
}
