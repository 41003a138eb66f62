use pagesmith_preview::Viewport;
use pagesmith_render::HtmlOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagesmith.config.json";

/// Pagesmith configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Viewport used when `--viewport` is not given
    pub default_viewport: Viewport,

    /// Indent generated HTML
    pub pretty: bool,

    /// Indent unit for pretty output
    pub indent: String,

    /// Undo levels kept by `apply` sessions (0 = unlimited)
    pub max_undo_levels: usize,

    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = Self::path_in(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path_in(cwd: &Path) -> PathBuf {
        cwd.join(DEFAULT_CONFIG_NAME)
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            pretty: self.pretty,
            indent: self.indent.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_viewport: Viewport::Desktop,
            pretty: true,
            indent: "  ".to_string(),
            max_undo_levels: 100,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "defaultViewport": "tablet",
            "pretty": false,
            "indent": "\t",
            "maxUndoLevels": 20,
            "logLevel": "debug"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_viewport, Viewport::Tablet);
        assert!(!config.pretty);
        assert_eq!(config.indent, "\t");
        assert_eq!(config.max_undo_levels, 20);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "defaultViewport": "mobile" }"#).unwrap();

        assert_eq!(config.default_viewport, Viewport::Mobile);
        assert_eq!(config.max_undo_levels, 100);
        assert!(config.pretty);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_viewport, Viewport::Desktop);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = std::env::temp_dir().join("pagesmith-config-missing");
        let config = Config::load(&dir).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_html_options_follow_config() {
        let config = Config {
            pretty: false,
            ..Config::default()
        };
        assert!(!config.html_options().pretty);
    }
}
