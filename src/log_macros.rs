/// Logs a record with optional `key = value` fields.
///
/// Without a logger argument the record goes to the global logger.
///
/// ```ignore
/// log!(info, "agent started", service = "checkout");
/// log!(logger, warn, "queue full", depth = 512);
/// ```
#[macro_export]
macro_rules! log {
    ($level:ident, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        let entry = $crate::LogInfo::new($crate::__level!($level), $message)
            $(.with_meta(stringify!($key), $value))*;
        $crate::log(entry);
    }};
    ($logger:expr, $level:ident, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        let entry = $crate::LogInfo::new($crate::__level!($level), $message)
            $(.with_meta(stringify!($key), $value))*;
        #[allow(unused_imports)]
        use $crate::AgentLog as _;
        $logger.log(entry);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __level {
    (trace) => {
        $crate::ResolvedLevel::Trace
    };
    (debug) => {
        $crate::ResolvedLevel::Debug
    };
    (info) => {
        $crate::ResolvedLevel::Info
    };
    (warn) => {
        $crate::ResolvedLevel::Warn
    };
    (error) => {
        $crate::ResolvedLevel::Error
    };
    (fatal) => {
        $crate::ResolvedLevel::Fatal
    };
}
