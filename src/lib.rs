mod agent_log;
pub mod config;
mod factory;
pub mod format;
mod global;
pub mod levels;
#[cfg(feature = "log-backend")]
pub mod log_backend;
mod log_macros;
mod logger;
mod logger_builder;
mod logger_options;
pub mod transports;

pub use agent_log::AgentLog;
pub use config::{apply_central_config, CentralConfig, LoggingConfig};
pub use factory::{create_logger, create_logger_with_transport, is_logger_custom};
pub use global::{close, configure, flush, log, logger, set_logger};
pub use levels::{is_known_level_name, resolve_level, ResolvedLevel, DEFAULT_LOG_LEVEL};
pub use logform::LogInfo;
pub use logger::Logger;
pub use logger_builder::LoggerBuilder;
pub use logger_options::{BackpressureStrategy, LoggerOptions};
