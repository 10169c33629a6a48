use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Level name used when configuration does not supply one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Severity token understood by the logging engine.
///
/// Numeric severities follow pino, so a higher value is more severe and
/// `Silent` sits above everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Silent,
}

impl ResolvedLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            ResolvedLevel::Trace => "trace",
            ResolvedLevel::Debug => "debug",
            ResolvedLevel::Info => "info",
            ResolvedLevel::Warn => "warn",
            ResolvedLevel::Error => "error",
            ResolvedLevel::Fatal => "fatal",
            ResolvedLevel::Silent => "silent",
        }
    }

    pub const fn severity(self) -> u8 {
        match self {
            ResolvedLevel::Trace => 10,
            ResolvedLevel::Debug => 20,
            ResolvedLevel::Info => 30,
            ResolvedLevel::Warn => 40,
            ResolvedLevel::Error => 50,
            ResolvedLevel::Fatal => 60,
            ResolvedLevel::Silent => u8::MAX,
        }
    }

    /// Returns true if a record at `entry_level` passes this threshold.
    ///
    /// `Silent` is only meaningful as a threshold; records carrying it are
    /// never emitted.
    pub fn enables(self, entry_level: ResolvedLevel) -> bool {
        entry_level != ResolvedLevel::Silent && entry_level.severity() >= self.severity()
    }
}

impl fmt::Display for ResolvedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResolvedLevel> for String {
    fn from(level: ResolvedLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Parses the engine's own tokens as they appear in [`LogInfo::level`].
///
/// This is not level-name resolution: configuration names go through
/// [`resolve_level`].
///
/// [`LogInfo::level`]: crate::LogInfo
impl FromStr for ResolvedLevel {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "trace" => Ok(ResolvedLevel::Trace),
            "debug" => Ok(ResolvedLevel::Debug),
            "info" => Ok(ResolvedLevel::Info),
            "warn" => Ok(ResolvedLevel::Warn),
            "error" => Ok(ResolvedLevel::Error),
            "fatal" => Ok(ResolvedLevel::Fatal),
            "silent" => Ok(ResolvedLevel::Silent),
            other => Err(format!("unknown level token: {}", other)),
        }
    }
}

// "warn" and "fatal" predate the current level vocabulary and stay accepted.
const LEVEL_NAMES: [(&str, ResolvedLevel); 9] = [
    ("trace", ResolvedLevel::Trace),
    ("debug", ResolvedLevel::Debug),
    ("info", ResolvedLevel::Info),
    ("warning", ResolvedLevel::Warn),
    ("warn", ResolvedLevel::Warn),
    ("error", ResolvedLevel::Error),
    ("critical", ResolvedLevel::Fatal),
    ("fatal", ResolvedLevel::Fatal),
    ("off", ResolvedLevel::Silent),
];

fn lookup(level_name: &str) -> Option<ResolvedLevel> {
    LEVEL_NAMES
        .iter()
        .find(|(name, _)| *name == level_name)
        .map(|(_, level)| *level)
}

/// Maps a configured level name onto the engine's severity token.
///
/// A missing or empty name falls back to [`DEFAULT_LOG_LEVEL`]. A name that is
/// not in the table resolves to [`ResolvedLevel::Trace`]: older releases
/// accepted any string and logged everything, and deployed configurations
/// rely on that.
pub fn resolve_level(level_name: Option<&str>) -> ResolvedLevel {
    let level_name = match level_name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_LOG_LEVEL,
    };

    match lookup(level_name) {
        Some(level) => level,
        None => ResolvedLevel::Trace,
    }
}

/// Whether `level_name` is part of the accepted vocabulary.
///
/// [`resolve_level`] never reports unknown names, so callers that want to warn
/// about a misconfiguration check here first.
pub fn is_known_level_name(level_name: &str) -> bool {
    lookup(level_name).is_some()
}
