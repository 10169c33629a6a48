use crate::{
    agent_log::{sealed::Token, AgentLog},
    format::ecs,
    levels::resolve_level,
    logger_options::LoggerOptions,
    transports::{self, Transport},
    Logger,
};
use logform::LogInfo;
use std::sync::Arc;

/// Builds the agent's own logger, writing ECS JSON lines to standard error.
///
/// `level_name` follows [`resolve_level`]: absent or empty means `info`, and an
/// unrecognized name means `trace`.
///
/// Every logger owns a background worker thread that writes its records.
/// Call [`Logger::flush`] or [`Logger::close`] before the process exits, or
/// let the logger drop, so queued records reach the sink.
pub fn create_logger(level_name: Option<&str>) -> Logger {
    create_logger_with_transport(level_name, Arc::new(transports::stderr()))
}

/// Same as [`create_logger`] with an explicit sink in place of standard error.
pub fn create_logger_with_transport(
    level_name: Option<&str>,
    sink: Arc<dyn Transport<LogInfo> + Send + Sync>,
) -> Logger {
    let options = LoggerOptions::new()
        .level(resolve_level(level_name))
        .format(ecs())
        .add_transport(sink);

    Logger::owned_by_factory(options)
}

/// Returns true unless `logger` was built by [`create_logger`] or
/// [`create_logger_with_transport`].
///
/// Custom loggers belong to the user; the agent must not change their level.
/// A type that wraps a factory logger and forwards to it is still custom.
pub fn is_logger_custom(logger: &dyn AgentLog) -> bool {
    !logger.is_factory_owned(Token(()))
}
