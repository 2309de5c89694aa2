use crate::error::AdResult;
use serde::Deserialize;

/// Root application configuration. Loaded from environment variables with
/// the prefix `ADBOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing env-filter directive applied when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Date format the shell accepts and renders.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_log_filter() -> String {
    "ad_console=info".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> AdResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log.filter, "ad_console=info");
        assert_eq!(config.console.date_format, "%Y-%m-%d");
    }
}
