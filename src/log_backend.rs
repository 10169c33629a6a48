use crate::{levels::ResolvedLevel, Logger};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use logform::LogInfo;
use serde_json::Value;
use std::sync::{atomic::Ordering, Arc};

fn resolved_from(level: Level) -> ResolvedLevel {
    match level {
        Level::Error => ResolvedLevel::Error,
        Level::Warn => ResolvedLevel::Warn,
        Level::Info => ResolvedLevel::Info,
        Level::Debug => ResolvedLevel::Debug,
        Level::Trace => ResolvedLevel::Trace,
    }
}

/// Closest `log` filter for a threshold. `log` has no fatal level, so
/// `Fatal` maps to `Error`.
pub fn level_filter(level: ResolvedLevel) -> LevelFilter {
    match level {
        ResolvedLevel::Trace => LevelFilter::Trace,
        ResolvedLevel::Debug => LevelFilter::Debug,
        ResolvedLevel::Info => LevelFilter::Info,
        ResolvedLevel::Warn => LevelFilter::Warn,
        ResolvedLevel::Error | ResolvedLevel::Fatal => LevelFilter::Error,
        ResolvedLevel::Silent => LevelFilter::Off,
    }
}

struct LogBridge(Arc<Logger>);

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Log::enabled(self.0.as_ref(), metadata)
    }

    fn log(&self, record: &Record) {
        Log::log(self.0.as_ref(), record);
    }

    fn flush(&self) {
        Log::flush(self.0.as_ref());
    }
}

/// Installs `logger` as the `log` crate's global logger.
///
/// The caller keeps its handle, so the threshold can still be changed (for
/// example by central config) and `log::max_level` follows every change.
/// Only one logger can be installed per process.
pub fn install(logger: Arc<Logger>) -> Result<(), SetLoggerError> {
    let max_level = level_filter(logger.level());
    log::set_boxed_logger(Box::new(LogBridge(Arc::clone(&logger))))?;
    logger.log_bridge.store(true, Ordering::Release);
    log::set_max_level(max_level);
    Ok(())
}

impl Logger {
    pub(crate) fn sync_log_max_level(&self, level: ResolvedLevel) {
        if self.log_bridge.load(Ordering::Acquire) {
            log::set_max_level(level_filter(level));
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_level_enabled(resolved_from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut entry = LogInfo::new(resolved_from(record.level()), record.args().to_string())
            .with_meta("timestamp", chrono::Utc::now().to_rfc3339())
            .with_meta("target", record.target());

        if let Some(file) = record.file() {
            entry = entry.with_meta("file", file);
        }
        if let Some(line) = record.line() {
            entry = entry.with_meta("line", Value::from(line));
        }
        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                entry = entry.with_meta("module_path", module_path);
            }
        }

        Logger::log(self, entry);
    }

    fn flush(&self) {
        if let Err(e) = Logger::flush(self) {
            eprintln!("[apm-logging] Error flushing logs: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logform::passthrough;
    use parking_lot::Mutex;
    use winston_transport::Transport;

    #[derive(Clone, Default)]
    struct TestTransport {
        logs: Arc<Mutex<Vec<LogInfo>>>,
    }

    impl Transport<LogInfo> for TestTransport {
        fn log(&self, info: LogInfo) {
            self.logs.lock().push(info);
        }
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(ResolvedLevel::Silent), LevelFilter::Off);
        assert_eq!(level_filter(ResolvedLevel::Fatal), LevelFilter::Error);
        assert_eq!(level_filter(ResolvedLevel::Trace), LevelFilter::Trace);
    }

    #[test]
    fn test_records_are_converted() {
        let transport = TestTransport::default();
        let logger = Logger::builder()
            .level(ResolvedLevel::Info)
            .format(passthrough())
            .add_transport(Arc::new(transport.clone()))
            .build();

        Log::log(
            &logger,
            &Record::builder()
                .args(format_args!("from log"))
                .level(Level::Warn)
                .target("agent::http")
                .line(Some(7))
                .build(),
        );
        Log::log(
            &logger,
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Debug)
                .build(),
        );
        Log::flush(&logger);

        let logs = transport.logs.lock();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, "warn");
        assert_eq!(logs[0].message, "from log");
        assert_eq!(logs[0].meta.get("target"), Some(&Value::from("agent::http")));
        assert_eq!(logs[0].meta.get("line"), Some(&Value::from(7)));
    }

    #[test]
    fn test_bridge_forwards_to_shared_logger() {
        let transport = TestTransport::default();
        let logger = Arc::new(
            Logger::builder()
                .level(ResolvedLevel::Info)
                .format(passthrough())
                .add_transport(Arc::new(transport.clone()))
                .build(),
        );
        let bridge = LogBridge(Arc::clone(&logger));

        let record = Record::builder()
            .args(format_args!("via bridge"))
            .level(Level::Debug)
            .build();
        assert!(!bridge.enabled(record.metadata()));

        logger.set_level(ResolvedLevel::Debug);
        assert!(bridge.enabled(record.metadata()));
        bridge.log(&record);
        bridge.flush();

        assert_eq!(transport.logs.lock().len(), 1);
    }
}
