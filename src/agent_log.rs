use crate::levels::ResolvedLevel;
use logform::LogInfo;

pub(crate) mod sealed {
    /// Only this crate can construct a `Token`, so only this crate can write
    /// or call a method that takes one.
    pub struct Token(pub(crate) ());
}

/// The logging surface the agent talks to.
///
/// Both the crate's own [`Logger`](crate::Logger) and loggers supplied by
/// users implement this. Only `log` is required.
pub trait AgentLog: Send + Sync {
    fn log(&self, entry: LogInfo);

    /// Active threshold, if the implementation exposes one.
    fn level(&self) -> Option<ResolvedLevel> {
        None
    }

    fn set_level(&self, _level: ResolvedLevel) -> Result<(), String> {
        Err("this logger does not support level changes".to_string())
    }

    fn flush(&self) -> Result<(), String> {
        Ok(())
    }

    /// Writes out anything still buffered and releases the logger's
    /// resources. Records logged afterwards may be dropped.
    fn close(&self) {}

    /// Whether [`create_logger`](crate::create_logger) built this logger.
    ///
    /// Implementations outside this crate cannot name the token type, so they
    /// always get the default.
    #[doc(hidden)]
    #[allow(private_interfaces)]
    fn is_factory_owned(&self, _token: sealed::Token) -> bool {
        false
    }

    fn trace(&self, message: &str) {
        self.log(LogInfo::new(ResolvedLevel::Trace, message));
    }

    fn debug(&self, message: &str) {
        self.log(LogInfo::new(ResolvedLevel::Debug, message));
    }

    fn info(&self, message: &str) {
        self.log(LogInfo::new(ResolvedLevel::Info, message));
    }

    fn warn(&self, message: &str) {
        self.log(LogInfo::new(ResolvedLevel::Warn, message));
    }

    fn error(&self, message: &str) {
        self.log(LogInfo::new(ResolvedLevel::Error, message));
    }

    fn fatal(&self, message: &str) {
        self.log(LogInfo::new(ResolvedLevel::Fatal, message));
    }
}
