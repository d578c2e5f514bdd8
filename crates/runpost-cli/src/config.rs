//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/runpost/config.toml` by default. Every section is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tracing::Level;

use runpost_core::stats::DEFAULT_TOP_ACTIVITIES;
use runpost_core::{AnalyzerConfig, TracingConfig};

// ---------------------------------------------------------------------------
// ClientConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the runpost client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug logging, same as `--debug`.
    pub debug: bool,

    /// Default input file, used when `--input` is not given.
    pub input: Option<PathBuf>,

    /// Engine settings: brand name and extra boilerplate.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Number of leading activities shown in distance series.
    pub top_activities: usize,

    /// Output JSON instead of text by default.
    pub json: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            top_activities: DEFAULT_TOP_ACTIVITIES,
            json: false,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the file named on the command line, or the default file.
    ///
    /// An explicit path must load. A broken default file falls back to
    /// defaults; the reason is returned so it can be logged once tracing is up.
    pub fn resolve(path: Option<&Path>) -> Result<(Self, Option<String>), String> {
        match path {
            Some(path) => Ok((Self::load_from(path)?, None)),
            None => Ok(match Self::load() {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            }),
        }
    }

    /// Picks the log preset from the flags and the `debug` setting.
    pub fn tracing_config(&self, debug_flag: bool, log_json: bool) -> TracingConfig {
        let debug = debug_flag || self.debug;
        match (log_json, debug) {
            (true, true) => TracingConfig::batch().with_level(Level::DEBUG),
            (true, false) => TracingConfig::batch(),
            (false, true) => TracingConfig::cli_debug(),
            (false, false) => TracingConfig::cli(),
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("runpost")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_values() {
        let config = ClientConfig::default();
        assert!(!config.debug);
        assert!(config.input.is_none());
        assert_eq!(config.analyzer.brand, "runkeeper");
        assert_eq!(config.display.top_activities, 3);
        assert!(!config.display.json);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.analyzer, AnalyzerConfig::default());
        assert_eq!(config.display.top_activities, 3);
    }

    #[test]
    fn parses_all_sections() {
        let toml_content = r#"
debug = true
input = "/data/posts.json"

[analyzer]
brand = "strava"
extra_phrases = ["tracked live"]
extra_patterns = ['\bin [0-9]+:[0-9]{2}\b']

[display]
top_activities = 5
json = true
"#;
        let config: ClientConfig = toml::from_str(toml_content).unwrap();
        assert!(config.debug);
        assert_eq!(config.input, Some(PathBuf::from("/data/posts.json")));
        assert_eq!(config.analyzer.brand, "strava");
        assert_eq!(config.analyzer.extra_phrases, vec!["tracked live".to_string()]);
        assert_eq!(config.analyzer.extra_patterns.len(), 1);
        assert_eq!(config.display.top_activities, 5);
        assert!(config.display.json);
    }

    #[test]
    fn partial_analyzer_section_keeps_brand_default() {
        let config: ClientConfig =
            toml::from_str("[analyzer]\nextra_phrases = [\"go team\"]\n").unwrap();
        assert_eq!(config.analyzer.brand, "runkeeper");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ntop_activities = 2").unwrap();
        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.display.top_activities, 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.contains("failed to read config"));
    }

    #[test]
    fn load_from_invalid_toml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display = [").unwrap();
        let err = ClientConfig::load_from(file.path()).unwrap_err();
        assert!(err.contains("failed to parse config"));
    }

    mod logging {
        use super::*;
        use runpost_core::TracingOutputFormat;

        #[test]
        fn quiet_by_default() {
            assert_eq!(ClientConfig::default().tracing_config(false, false), TracingConfig::cli());
        }

        #[test]
        fn debug_setting_enables_debug_logs() {
            let config: ClientConfig = toml::from_str("debug = true").unwrap();
            assert_eq!(config.tracing_config(false, false), TracingConfig::cli_debug());
        }

        #[test]
        fn flag_enables_debug_logs() {
            assert_eq!(ClientConfig::default().tracing_config(true, false), TracingConfig::cli_debug());
        }

        #[test]
        fn log_json_selects_batch_preset() {
            let config = ClientConfig::default();
            assert_eq!(config.tracing_config(false, true), TracingConfig::batch());

            let debug = config.tracing_config(true, true);
            assert_eq!(debug.output_format, TracingOutputFormat::Json);
            assert_eq!(debug.default_level, Level::DEBUG);
        }
    }

    mod resolve {
        use super::*;

        #[test]
        fn explicit_path_loads() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "debug = true").unwrap();
            let (config, skipped) = ClientConfig::resolve(Some(file.path())).unwrap();
            assert!(config.debug);
            assert!(skipped.is_none());
        }

        #[test]
        fn broken_explicit_path_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            assert!(ClientConfig::resolve(Some(&dir.path().join("missing.toml"))).is_err());
        }
    }

    #[test]
    fn serializes_back_to_toml() {
        let toml_str = toml::to_string_pretty(&ClientConfig::default()).unwrap();
        assert!(toml_str.contains("[analyzer]"));
        assert!(toml_str.contains("brand = \"runkeeper\""));
    }
}
