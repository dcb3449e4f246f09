//! Server configuration from the environment.

use std::env;

use crate::proposal::TemplatePreset;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Headless rasterizer binary used for PDF export.
    pub rasterizer_binary: String,
    /// Preset used when a compose request does not name one.
    pub default_preset: TemplatePreset,
    /// Overrides the bundled service catalog when set.
    pub catalog_path: Option<String>,
}

impl ServerConfig {
    /// Read configuration from HOST, PORT, RASTERIZER_BIN,
    /// DEFAULT_TEMPLATE_PRESET and SERVICE_CATALOG_PATH, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(env::var("PORT").ok()),
            rasterizer_binary: env::var("RASTERIZER_BIN")
                .unwrap_or_else(|_| "wkhtmltoimage".to_string()),
            default_preset: parse_preset(env::var("DEFAULT_TEMPLATE_PRESET").ok()),
            catalog_path: env::var("SERVICE_CATALOG_PATH").ok(),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(8080)
}

fn parse_preset(raw: Option<String>) -> TemplatePreset {
    match raw {
        Some(value) if value.eq_ignore_ascii_case("classic") => TemplatePreset::Classic,
        _ => TemplatePreset::Branded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset_or_invalid() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("not-a-port".to_string())), 8080);
        assert_eq!(parse_port(Some("3000".to_string())), 3000);
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!(parse_preset(None), TemplatePreset::Branded);
        assert_eq!(
            parse_preset(Some("classic".to_string())),
            TemplatePreset::Classic
        );
        assert_eq!(
            parse_preset(Some("CLASSIC".to_string())),
            TemplatePreset::Classic
        );
        assert_eq!(
            parse_preset(Some("anything-else".to_string())),
            TemplatePreset::Branded
        );
    }
}
