use crate::levels::{resolve_level, ResolvedLevel};
use logform::{json, Format, LogInfo};
use std::{fmt, sync::Arc};
use winston_transport::Transport;

#[derive(Clone)]
pub struct LoggerOptions {
    pub level: Option<ResolvedLevel>,
    pub format: Option<Arc<dyn Format<Input = LogInfo> + Send + Sync>>,
    pub transports: Option<Vec<Arc<dyn Transport<LogInfo> + Send + Sync>>>,
    pub channel_capacity: Option<usize>,
    pub backpressure_strategy: Option<BackpressureStrategy>,
}

impl LoggerOptions {
    /// Creates a new `LoggerOptions` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the severity threshold for the logger.
    pub fn level(mut self, level: ResolvedLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the threshold from a configured level name.
    ///
    /// Unknown names are accepted and resolve to `trace`; see
    /// [`resolve_level`].
    pub fn level_name(self, level_name: Option<&str>) -> Self {
        self.level(resolve_level(level_name))
    }

    /// Sets the log format for the logger.
    pub fn format<F>(mut self, format: F) -> Self
    where
        F: Format<Input = LogInfo> + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }

    /// Adds a single transport, keeping any previously added transports.
    ///
    /// The handle can later be passed to
    /// [`Logger::remove_transport`](crate::Logger::remove_transport).
    pub fn add_transport(mut self, transport: Arc<dyn Transport<LogInfo> + Send + Sync>) -> Self {
        self.transports
            .get_or_insert_with(Vec::new)
            .push(transport);
        self
    }

    /// Replaces the existing transports.
    pub fn transports(mut self, transports: Vec<Arc<dyn Transport<LogInfo> + Send + Sync>>) -> Self {
        self.transports = Some(transports);
        self
    }

    /// Sets the capacity of the channel between callers and the worker.
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = Some(capacity);
        self
    }

    /// Sets what happens when the channel is full.
    pub fn backpressure_strategy(mut self, strategy: BackpressureStrategy) -> Self {
        self.backpressure_strategy = Some(strategy);
        self
    }
}

impl Default for LoggerOptions {
    /// Provides the default configuration for `LoggerOptions`.
    ///
    /// The default configuration includes:
    /// - The threshold set to `info`.
    /// - No transports.
    /// - The JSON format for log entries.
    /// - A channel capacity of 1024.
    /// - `BackpressureStrategy::Block`, so callers wait for space on overflow.
    fn default() -> Self {
        LoggerOptions {
            level: Some(ResolvedLevel::Info),
            format: Some(Arc::new(json())),
            transports: Some(Vec::new()),
            channel_capacity: Some(1024),
            backpressure_strategy: Some(BackpressureStrategy::Block),
        }
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("level", &self.level)
            .field("format", &self.format.as_ref().map(|_| "Format<...>"))
            .field(
                "transports",
                &self.transports.as_ref().map(|t| t.len()),
            )
            .field("channel_capacity", &self.channel_capacity)
            .field("backpressure_strategy", &self.backpressure_strategy)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackpressureStrategy {
    Block,
    DropCurrent,
}
