//! Converter configuration management.

use serde::Deserialize;

/// How amount text that is not a base-10 decimal is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Reject the text with `ConversionError::InvalidAmount`.
    #[default]
    Strict,
    /// Treat the text as zero and log a warning.
    Lenient,
}

/// Converter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConverterConfig {
    /// Handling of unparseable amount text.
    #[serde(default)]
    pub parse_mode: ParseMode,
    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "weiunits=info".to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl ConverterConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// - `config/default.toml`
    /// - `config/{RUN_MODE}.toml`
    /// - `WEIUNITS__*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("WEIUNITS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
