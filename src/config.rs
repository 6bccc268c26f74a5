use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration
///
/// Every section defaults so a host can embed the engine without shipping a
/// config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            matching: MatchingSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Tuning for the swipe evaluator wiring
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Probability that a like matches under the uniform random source
    #[serde(default = "default_match_probability")]
    pub match_probability: f64,
    /// When set, super-likes match deterministically instead of consulting
    /// the decision source
    #[serde(default)]
    pub super_like_always_matches: bool,
    /// Seed for reproducible simulation runs
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            match_probability: default_match_probability(),
            super_like_always_matches: false,
            random_seed: None,
        }
    }
}

fn default_match_probability() -> f64 { 0.5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with BREW_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with BREW_)
            // e.g., BREW_MATCHING__MATCH_PROBABILITY -> matching.match_probability
            .add_source(
                Environment::with_prefix("BREW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BREW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
