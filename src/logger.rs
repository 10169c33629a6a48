use crate::{
    agent_log::{sealed::Token, AgentLog},
    levels::{resolve_level, ResolvedLevel},
    logger_builder::LoggerBuilder,
    logger_options::{BackpressureStrategy, LoggerOptions},
};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use logform::{json, Format, LogInfo};
use parking_lot::{Mutex, RwLock};
use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};
use winston_transport::Transport;

enum LogMessage {
    Entry(LogInfo),
    Flush(Sender<()>),
    Shutdown,
}

struct SharedState {
    level: ResolvedLevel,
    format: Arc<dyn Format<Input = LogInfo> + Send + Sync>,
    transports: Vec<Arc<dyn Transport<LogInfo> + Send + Sync>>,
}

/// Structured logger with a severity threshold and a background writer.
///
/// Records below the threshold are discarded on the calling thread. The rest
/// go through a bounded channel to a worker thread that formats them and hands
/// them to every transport.
///
/// Records carry their level as a string token (see [`ResolvedLevel`]'s
/// `FromStr`); a record whose token is not one of those is discarded.
pub struct Logger {
    worker_thread: Mutex<Option<thread::JoinHandle<()>>>,
    sender: Sender<LogMessage>,
    shared_state: Arc<RwLock<SharedState>>,
    backpressure_strategy: BackpressureStrategy,
    closed: AtomicBool,
    factory_owned: bool,
    #[cfg(feature = "log-backend")]
    pub(crate) log_bridge: AtomicBool,
}

impl Logger {
    pub fn new(options: Option<LoggerOptions>) -> Self {
        Self::spawn(options.unwrap_or_default(), false)
    }

    pub(crate) fn owned_by_factory(options: LoggerOptions) -> Self {
        Self::spawn(options, true)
    }

    fn spawn(options: LoggerOptions, factory_owned: bool) -> Self {
        let capacity = options.channel_capacity.unwrap_or(1024).max(1);
        let (sender, receiver) = bounded(capacity);

        let shared_state = Arc::new(RwLock::new(SharedState {
            level: options.level.unwrap_or(ResolvedLevel::Info),
            format: options.format.unwrap_or_else(|| Arc::new(json())),
            transports: options.transports.unwrap_or_default(),
        }));

        let worker_shared_state = Arc::clone(&shared_state);
        let worker_thread =
            thread::spawn(move || Self::worker_loop(receiver, worker_shared_state));

        Logger {
            worker_thread: Mutex::new(Some(worker_thread)),
            sender,
            shared_state,
            backpressure_strategy: options
                .backpressure_strategy
                .unwrap_or(BackpressureStrategy::Block),
            closed: AtomicBool::new(false),
            factory_owned,
            #[cfg(feature = "log-backend")]
            log_bridge: AtomicBool::new(false),
        }
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn worker_loop(receiver: Receiver<LogMessage>, shared_state: Arc<RwLock<SharedState>>) {
        for message in receiver.iter() {
            match message {
                LogMessage::Entry(entry) => {
                    let state = shared_state.read();
                    Self::process_entry(entry, &state);
                }
                LogMessage::Flush(done) => {
                    Self::flush_transports(&shared_state.read());
                    let _ = done.send(());
                }
                LogMessage::Shutdown => {
                    Self::flush_transports(&shared_state.read());
                    break;
                }
            }
        }

        // Dropping queued flush requests wakes their waiters with an error.
        while receiver.try_recv().is_ok() {}
    }

    fn process_entry(entry: LogInfo, state: &SharedState) {
        if (entry.message.is_empty() && entry.meta.is_empty()) || state.transports.is_empty() {
            return;
        }

        if let Some(formatted) = state.format.transform(entry) {
            for transport in &state.transports {
                transport.log(formatted.clone());
            }
        }
    }

    fn flush_transports(state: &SharedState) {
        for transport in &state.transports {
            if let Err(e) = transport.flush() {
                eprintln!("[apm-logging] Error flushing transport: {}", e);
            }
        }
    }

    /// Current severity threshold.
    pub fn level(&self) -> ResolvedLevel {
        self.shared_state.read().level
    }

    pub fn set_level(&self, level: ResolvedLevel) {
        self.shared_state.write().level = level;
        self.sync_log_max_level(level);
    }

    #[cfg(not(feature = "log-backend"))]
    fn sync_log_max_level(&self, _level: ResolvedLevel) {}

    /// Resolves `level_name` with the usual rules and applies it.
    pub fn set_level_name(&self, level_name: Option<&str>) -> ResolvedLevel {
        let level = resolve_level(level_name);
        self.set_level(level);
        level
    }

    pub fn is_level_enabled(&self, level: ResolvedLevel) -> bool {
        self.level().enables(level)
    }

    pub fn log(&self, entry: LogInfo) {
        match entry.level.parse::<ResolvedLevel>() {
            Ok(level) if self.is_level_enabled(level) => {}
            _ => return,
        }

        match self.backpressure_strategy {
            BackpressureStrategy::Block => {
                if self.sender.send(LogMessage::Entry(entry)).is_err() {
                    eprintln!("[apm-logging] Logger is closed. Unable to log message.");
                }
            }
            BackpressureStrategy::DropCurrent => {
                match self.sender.try_send(LogMessage::Entry(entry)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        eprintln!("[apm-logging] Dropping log entry due to full channel.");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        eprintln!("[apm-logging] Logger is closed. Unable to log message.");
                    }
                }
            }
        }
    }

    /// Blocks until every record logged before this call has been written
    /// and each transport has been flushed.
    pub fn flush(&self) -> Result<(), String> {
        if self.closed.load(Ordering::Acquire) {
            return Err("logger is closed".to_string());
        }

        let (done_sender, done_receiver) = bounded(1);
        self.sender
            .send(LogMessage::Flush(done_sender))
            .map_err(|_| "logger is closed".to_string())?;

        done_receiver
            .recv()
            .map_err(|_| "logger stopped before flushing".to_string())
    }

    /// Writes out pending records and stops the worker thread.
    ///
    /// Safe to call more than once; later calls do nothing.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let _ = self.sender.send(LogMessage::Shutdown);

        if let Some(handle) = self.worker_thread.lock().take() {
            if handle.join().is_err() {
                eprintln!("[apm-logging] Logger worker thread panicked.");
            }
        }
    }

    pub fn add_transport(&self, transport: Arc<dyn Transport<LogInfo> + Send + Sync>) -> bool {
        self.shared_state.write().transports.push(transport);
        true
    }

    /// Removes a transport previously added, compared by pointer identity.
    pub fn remove_transport(&self, transport: &Arc<dyn Transport<LogInfo> + Send + Sync>) -> bool {
        let mut state = self.shared_state.write();
        match state
            .transports
            .iter()
            .position(|t| Arc::ptr_eq(t, transport))
        {
            Some(index) => {
                state.transports.remove(index);
                true
            }
            None => false,
        }
    }
}

macro_rules! create_log_methods {
    ($($name:ident => $level:ident),* $(,)?) => {
        impl Logger {
            $(
                pub fn $name(&self, message: &str) {
                    self.log(LogInfo::new(ResolvedLevel::$level, message));
                }
            )*
        }
    };
}

create_log_methods!(
    trace => Trace,
    debug => Debug,
    info => Info,
    warn => Warn,
    error => Error,
    fatal => Fatal,
);

impl AgentLog for Logger {
    fn log(&self, entry: LogInfo) {
        Logger::log(self, entry);
    }

    fn level(&self) -> Option<ResolvedLevel> {
        Some(Logger::level(self))
    }

    fn set_level(&self, level: ResolvedLevel) -> Result<(), String> {
        Logger::set_level(self, level);
        Ok(())
    }

    fn flush(&self) -> Result<(), String> {
        Logger::flush(self)
    }

    fn close(&self) {
        Logger::close(self);
    }

    fn is_factory_owned(&self, _token: Token) -> bool {
        self.factory_owned
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(None)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared_state.read();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("transports", &state.transports.len())
            .field("backpressure_strategy", &self.backpressure_strategy)
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
