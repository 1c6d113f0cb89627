//! Structured logging setup and lightweight console helpers.
//!
//! This module configures the `tracing` ecosystem and exposes two small
//! wrappers, [`console_log`] and [`log_exception`], used across the crate.
//! When the host application has installed a global subscriber the wrappers
//! emit `tracing` events through it; otherwise they fall back to stdout so
//! scripts and tests still see the output.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{Result, UtilsError};
use std::error::Error;
use std::fmt::Display;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line output.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`. Fails if a global subscriber already exists.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    installed.map_err(|e| UtilsError::Config(format!("logging already initialized: {}", e)))
}

/// True when a subscriber is active for this thread, scoped or global.
fn has_app_logger() -> bool {
    tracing::dispatcher::get_default(|dispatch| {
        !dispatch.is::<tracing::subscriber::NoSubscriber>()
    })
}

/// Log a key/value pair at INFO level.
///
/// # Arguments
///
/// * `key` - Short label recorded as the `event_type` field.
/// * `value` - Anything printable; becomes the message.
pub fn console_log(key: &str, value: impl Display) {
    if has_app_logger() {
        info!(event_type = key, "{}", value);
    } else {
        println!("[{}] {}", key, value);
    }
}

/// Log an error with context at ERROR level. The error is not consumed or re-raised.
///
/// Wrapped causes are recorded in the `sources` field, outermost first.
pub fn log_exception<E>(context: &str, err: &E)
where
    E: Error + ?Sized,
{
    let error_type = short_type_name::<E>();
    let sources = source_chain(err);
    if has_app_logger() {
        error!(error_type = error_type, error = %err, sources = %sources, "{}", context);
    } else if sources.is_empty() {
        println!("[{}] {}: {}", error_type, context, err);
    } else {
        println!("[{}] {}: {} (caused by: {})", error_type, context, err, sources);
    }
}

/// `source()` messages joined with `": "`, empty when there is no cause.
fn source_chain<E: Error + ?Sized>(err: &E) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}

/// Last path segment of a type name, keeping generic arguments intact.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    #[derive(Debug, Clone)]
    struct Recorded {
        level: Level,
        fields: HashMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Recorded>>>,
    }

    struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.events.lock().unwrap().push(Recorded {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    fn capture<F: FnOnce()>(f: F) -> Vec<Recorded> {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, f);
        let events = layer.events.lock().unwrap().clone();
        events
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<UtilsError>(), "UtilsError");
    }

    #[test]
    fn test_no_logger_after_scoped_subscriber_dropped() {
        {
            let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
            assert!(has_app_logger());
        }
        assert!(!has_app_logger());
    }

    #[test]
    fn test_console_log_records_event_type() {
        let events = capture(|| console_log("user_signup", 42));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::INFO);
        assert_eq!(events[0].fields["event_type"], "user_signup");
        assert_eq!(events[0].fields["message"], "42");
    }

    #[test]
    fn test_log_exception_records_error_fields() {
        let err = UtilsError::NotFound;
        let events = capture(|| log_exception("loading record", &err));

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Level::ERROR);
        assert_eq!(event.fields["message"], "loading record");
        assert_eq!(event.fields["error_type"], "UtilsError");
        assert_eq!(event.fields["error"], "Resource not found");
        assert_eq!(event.fields["sources"], "");
        // The error is only borrowed
        assert_eq!(err.to_string(), "Resource not found");
    }

    #[test]
    fn test_log_exception_records_source_chain() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause = json_err.to_string();
        let err = UtilsError::from(json_err);

        assert_eq!(source_chain(&err), cause);

        let events = capture(|| log_exception("decoding payload", &err));
        assert_eq!(events[0].fields["sources"], cause);
    }

    #[test]
    fn test_fallback_paths_without_subscriber() {
        assert!(!has_app_logger());
        console_log("count", 3);
        log_exception("loading record", &UtilsError::NotFound);
    }
}
