//! Observability subsystem for prodledger
//!
//! Structured JSON logging of typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//!
//! # Usage
//!
//! ```ignore
//! use prodledger::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordStored, &[("key", &key)]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity, LOG_LEVEL_ENV};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
