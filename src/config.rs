use crate::{
    agent_log::AgentLog,
    factory::{create_logger, is_logger_custom},
    levels::{resolve_level, ResolvedLevel},
};
use serde::Deserialize;
use std::{env, fmt, sync::Arc};

/// Environment variable holding the startup level name.
pub const LOG_LEVEL_ENV: &str = "ELASTIC_APM_LOG_LEVEL";

/// Startup logging settings.
#[derive(Clone, Default)]
pub struct LoggingConfig {
    pub log_level: Option<String>,
    pub logger: Option<Arc<dyn AgentLog>>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the level name from [`LOG_LEVEL_ENV`], if set.
    pub fn from_env() -> Self {
        LoggingConfig {
            log_level: env::var(LOG_LEVEL_ENV).ok(),
            logger: None,
        }
    }

    pub fn log_level<T: Into<String>>(mut self, level_name: T) -> Self {
        self.log_level = Some(level_name.into());
        self
    }

    /// Supplies a user-owned logger to use in place of the agent's own.
    pub fn logger(mut self, logger: Arc<dyn AgentLog>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns the custom logger if one was given, otherwise a fresh logger
    /// from [`create_logger`] at the configured level.
    pub fn build_logger(&self) -> Arc<dyn AgentLog> {
        match &self.logger {
            Some(logger) => Arc::clone(logger),
            None => Arc::new(create_logger(self.log_level.as_deref())),
        }
    }
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("log_level", &self.log_level)
            .field("logger", &self.logger.as_ref().map(|_| "AgentLog<...>"))
            .finish()
    }
}

/// Settings pushed by central configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CentralConfig {
    #[serde(default)]
    pub log_level: Option<String>,
}

impl CentralConfig {
    pub fn from_json(payload: &str) -> Result<Self, String> {
        serde_json::from_str(payload).map_err(|e| format!("Invalid central config: {}", e))
    }
}

/// Applies a central configuration update to `logger`.
///
/// Returns the level now in effect, or `None` if the update carries no level.
/// Custom loggers are left alone and produce an error.
pub fn apply_central_config(
    logger: &dyn AgentLog,
    update: &CentralConfig,
) -> Result<Option<ResolvedLevel>, String> {
    let level_name = match update.log_level.as_deref() {
        Some(name) => name,
        None => return Ok(None),
    };

    if is_logger_custom(logger) {
        return Err(format!(
            "Not applying central config log_level \"{}\" to a custom logger",
            level_name
        ));
    }

    let level = resolve_level(Some(level_name));
    logger.set_level(level)?;
    Ok(Some(level))
}
