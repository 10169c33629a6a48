#![allow(dead_code)]

use apm_logging::{transports::Transport, LogInfo, ResolvedLevel};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockTransport {
    logs: Arc<Mutex<Vec<LogInfo>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_logs(&self) -> Vec<LogInfo> {
        self.logs.lock().unwrap().clone()
    }

    pub fn log_count(&self) -> usize {
        self.logs.lock().unwrap().len()
    }

    pub fn levels(&self) -> Vec<ResolvedLevel> {
        self.get_logs()
            .iter()
            .map(|info| info.level.parse().unwrap())
            .collect()
    }

    /// Formatted lines parsed back into JSON.
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.get_logs()
            .iter()
            .map(|info| serde_json::from_str(&info.message).unwrap())
            .collect()
    }
}

impl Transport<LogInfo> for MockTransport {
    fn log(&self, info: LogInfo) {
        self.logs.lock().unwrap().push(info);
    }
}

/// In-memory `Write` sink shared between a transport and the test.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
