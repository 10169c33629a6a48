use crate::{agent_log::AgentLog, config::LoggingConfig, factory::create_logger};
use lazy_static::lazy_static;
use logform::LogInfo;
use parking_lot::RwLock;
use std::sync::Arc;

lazy_static! {
    static ref GLOBAL_LOGGER: RwLock<Arc<dyn AgentLog>> =
        RwLock::new(Arc::new(create_logger(None)) as Arc<dyn AgentLog>);
}

/// The process-wide agent logger.
pub fn logger() -> Arc<dyn AgentLog> {
    Arc::clone(&GLOBAL_LOGGER.read())
}

pub fn set_logger(logger: Arc<dyn AgentLog>) {
    // Dropping the old logger may flush it; do that outside the lock.
    let previous = std::mem::replace(&mut *GLOBAL_LOGGER.write(), logger);
    drop(previous);
}

/// Replaces the global logger with the one `config` describes.
pub fn configure(config: &LoggingConfig) {
    set_logger(config.build_logger());
}

pub fn log(entry: LogInfo) {
    logger().log(entry);
}

pub fn flush() -> Result<(), String> {
    logger().flush()
}

/// Writes out every queued record and stops the global logger.
///
/// The global logger lives in a static and is never dropped, so records still
/// queued when the process exits are lost. Call this (or [`flush`]) before
/// returning from `main` or calling `std::process::exit`.
pub fn close() {
    logger().close();
}
