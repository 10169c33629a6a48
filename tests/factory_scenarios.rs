mod common;

use apm_logging::{create_logger_with_transport, is_logger_custom, Logger, ResolvedLevel};
use common::MockTransport;
use std::sync::Arc;

fn factory_logger(level_name: Option<&str>) -> (Logger, MockTransport) {
    let transport = MockTransport::new();
    let logger = create_logger_with_transport(level_name, Arc::new(transport.clone()));
    (logger, transport)
}

fn log_every_level(logger: &Logger) {
    logger.trace("trace message");
    logger.debug("debug message");
    logger.info("info message");
    logger.warn("warn message");
    logger.error("error message");
    logger.fatal("fatal message");
    logger.flush().unwrap();
}

#[test]
fn test_default_logger_emits_info_and_above() {
    let (logger, transport) = factory_logger(None);
    assert_eq!(logger.level(), ResolvedLevel::Info);

    logger.debug("suppressed");
    logger.info("emitted");
    logger.error("emitted too");
    logger.flush().unwrap();

    assert_eq!(
        transport.levels(),
        vec![ResolvedLevel::Info, ResolvedLevel::Error]
    );
}

#[test]
fn test_off_logger_emits_nothing() {
    let (logger, transport) = factory_logger(Some("off"));
    assert_eq!(logger.level(), ResolvedLevel::Silent);

    log_every_level(&logger);

    assert_eq!(transport.log_count(), 0);
}

#[test]
fn test_warning_logger_emits_warn() {
    let (logger, transport) = factory_logger(Some("warning"));
    assert_eq!(logger.level(), ResolvedLevel::Warn);

    logger.warn("emitted");
    logger.debug("suppressed");
    logger.flush().unwrap();

    assert_eq!(transport.levels(), vec![ResolvedLevel::Warn]);
}

#[test]
fn test_unknown_level_logger_emits_everything() {
    let (logger, transport) = factory_logger(Some("nonsense"));
    assert_eq!(logger.level(), ResolvedLevel::Trace);

    log_every_level(&logger);

    assert_eq!(transport.log_count(), 6);
}

#[test]
fn test_user_supplied_logger_is_custom() {
    let transport = MockTransport::new();
    let custom = Logger::builder()
        .add_transport(Arc::new(transport))
        .build();

    assert!(is_logger_custom(&custom));
}

#[test]
fn test_factory_records_are_ecs_json() {
    let (logger, transport) = factory_logger(Some("debug"));

    apm_logging::log!(logger, debug, "span ended", duration_ms = 12);
    logger.flush().unwrap();

    let records = transport.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["log.level"], "debug");
    assert_eq!(records[0]["message"], "span ended");
    assert_eq!(records[0]["duration_ms"], 12);
    assert!(records[0]["ecs"]["version"].is_string());
}

#[test]
fn test_ownership_mark_is_not_serialized() {
    let (logger, transport) = factory_logger(None);

    logger.info("look at my fields");
    logger.flush().unwrap();

    let records = transport.records();
    let mut fields: Vec<&str> = records[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["@timestamp", "ecs", "log.level", "message"]);
}
