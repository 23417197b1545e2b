//! API configuration

use std::path::PathBuf;
use std::time::Duration;

use infra_render::{FontSources, RenderSettings};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Regular TrueType font
    pub font_regular: PathBuf,
    /// Bold TrueType font
    pub font_bold: PathBuf,
    /// Italic TrueType font
    pub font_italic: PathBuf,
    /// Pause between painting and capturing a quote image
    pub settle_delay_ms: u64,
    /// Directory that keeps a copy of every generated image
    pub output_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let fonts = FontSources::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            font_regular: fonts.regular,
            font_bold: fonts.bold,
            font_italic: fonts.italic,
            settle_delay_ms: 300,
            output_dir: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Variables that are not set keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured font files
    pub fn font_sources(&self) -> FontSources {
        FontSources {
            regular: self.font_regular.clone(),
            bold: self.font_bold.clone(),
            italic: self.font_italic.clone(),
        }
    }

    /// Returns render settings for the configured settle delay
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::default().with_settle_delay(Duration::from_millis(self.settle_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.render_settings().settle_delay, Duration::from_millis(300));
        assert_eq!(config.font_sources(), FontSources::default());
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: ApiConfig = config::Config::builder()
            .set_override("port", 9090)
            .unwrap()
            .set_override("settle_delay_ms", 0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.render_settings().settle_delay.is_zero());
    }
}
