use crate::{
    levels::ResolvedLevel,
    logger_options::{BackpressureStrategy, LoggerOptions},
    Logger,
};
use logform::{Format, LogInfo};
use std::sync::Arc;
use winston_transport::Transport;

pub struct LoggerBuilder {
    options: LoggerOptions,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        LoggerBuilder {
            options: LoggerOptions::default(),
        }
    }

    pub fn level(mut self, level: ResolvedLevel) -> Self {
        self.options = self.options.level(level);
        self
    }

    pub fn level_name(mut self, level_name: Option<&str>) -> Self {
        self.options = self.options.level_name(level_name);
        self
    }

    pub fn format<F>(mut self, format: F) -> Self
    where
        F: Format<Input = LogInfo> + Send + Sync + 'static,
    {
        self.options = self.options.format(format);
        self
    }

    pub fn add_transport(mut self, transport: Arc<dyn Transport<LogInfo> + Send + Sync>) -> Self {
        self.options = self.options.add_transport(transport);
        self
    }

    pub fn transports(mut self, transports: Vec<Arc<dyn Transport<LogInfo> + Send + Sync>>) -> Self {
        self.options = self.options.transports(transports);
        self
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.channel_capacity(capacity);
        self
    }

    pub fn backpressure_strategy(mut self, strategy: BackpressureStrategy) -> Self {
        self.options = self.options.backpressure_strategy(strategy);
        self
    }

    pub fn build(self) -> Logger {
        Logger::new(Some(self.options))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_construction() {
        let logger = LoggerBuilder::new().build();
        assert_eq!(logger.level(), ResolvedLevel::Info);
    }

    #[test]
    fn test_builder_with_level() {
        let logger = LoggerBuilder::new().level(ResolvedLevel::Debug).build();
        assert_eq!(logger.level(), ResolvedLevel::Debug);
    }

    #[test]
    fn test_builder_with_level_name() {
        let logger = LoggerBuilder::new().level_name(Some("off")).build();
        assert_eq!(logger.level(), ResolvedLevel::Silent);
    }

    #[test]
    fn test_builder_chaining() {
        let logger = LoggerBuilder::new()
            .level(ResolvedLevel::Warn)
            .channel_capacity(512)
            .backpressure_strategy(BackpressureStrategy::DropCurrent)
            .format(crate::format::ecs())
            .build();

        assert_eq!(logger.level(), ResolvedLevel::Warn);
        assert!(logger.flush().is_ok());
    }
}
