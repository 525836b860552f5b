use log::Level;

pub const DEFAULT_TITLE: &str = "eCommerce Reporting Service";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level `{0}`, expected one of error, warn, info, debug, trace")]
    InvalidLogLevel(String),
}

/// Settings baked into the bundle at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Document title.
    pub title: String,
    pub log_level: Level,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_level: Level::Info,
        }
    }
}

impl ShellConfig {
    /// Reads `REPORT_SHELL_TITLE` and `REPORT_SHELL_LOG` as they were when the
    /// crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("REPORT_SHELL_TITLE"),
            option_env!("REPORT_SHELL_LOG"),
        )
    }

    pub fn from_values(title: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
            config.title = title.to_string();
        }

        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            config.log_level = level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        Ok(config)
    }
}
