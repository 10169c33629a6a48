use chrono::{SecondsFormat, Utc};
use logform::LogInfo;
pub use logform::{json, passthrough, Format};
use serde_json::{Map, Value};

/// ECS schema version stamped on records produced by [`ecs`].
pub const ECS_VERSION: &str = "1.6.0";

/// Elastic Common Schema flavoured JSON, one object per line.
///
/// The rendered object replaces `message`; the record's fields are folded in
/// but never override `log.level`, `@timestamp`, `message` or `ecs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcsFormat;

impl Format for EcsFormat {
    type Input = LogInfo;

    fn transform(&self, info: LogInfo) -> Option<Self::Input> {
        let mut fields = Map::new();
        fields.insert("log.level".to_string(), Value::from(info.level.as_str()));
        fields.insert(
            "@timestamp".to_string(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        fields.insert("message".to_string(), Value::from(info.message.as_str()));
        let mut ecs = Map::new();
        ecs.insert("version".to_string(), Value::from(ECS_VERSION));
        fields.insert("ecs".to_string(), Value::Object(ecs));

        for (key, value) in info.meta {
            fields.entry(key).or_insert(value);
        }

        match serde_json::to_string(&Value::Object(fields)) {
            Ok(line) => Some(LogInfo::new(info.level, line)),
            Err(e) => {
                eprintln!("[apm-logging] Failed to serialize log record: {}", e);
                None
            }
        }
    }
}

pub fn ecs() -> EcsFormat {
    EcsFormat
}
