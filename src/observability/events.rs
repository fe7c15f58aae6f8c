//! Observable events for prodledger
//!
//! Events are explicit and typed; the logger only ever sees their names.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Dispatch
    /// Function invocation received
    InvocationReceived,
    /// Function invocation rejected
    InvocationRejected,

    // Records
    /// Record decoded from caller JSON
    RecordDecoded,
    /// Record written to the ledger
    RecordStored,
    /// Record read back from the ledger
    RecordRead,

    // Queries
    /// Rich query handed to the executor
    QueryExecuted,
    /// Page assembled from a cursor
    PageAssembled,
    /// Pagination aborted
    PageRejected,
    /// Releasing a cursor failed
    CursorCloseFailed,

    // Output
    /// Writing the CLI response failed
    ResponseWriteFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InvocationReceived => "INVOCATION_RECEIVED",
            Event::InvocationRejected => "INVOCATION_REJECTED",
            Event::RecordDecoded => "RECORD_DECODED",
            Event::RecordStored => "RECORD_STORED",
            Event::RecordRead => "RECORD_READ",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::PageAssembled => "PAGE_ASSEMBLED",
            Event::PageRejected => "PAGE_REJECTED",
            Event::CursorCloseFailed => "CURSOR_CLOSE_FAILED",
            Event::ResponseWriteFailed => "RESPONSE_WRITE_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordDecoded | Event::QueryExecuted => Severity::Trace,
            Event::CursorCloseFailed | Event::ResponseWriteFailed => Severity::Warn,
            Event::InvocationRejected | Event::PageRejected => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::RecordStored.as_str(), "RECORD_STORED");
        assert_eq!(Event::PageAssembled.to_string(), "PAGE_ASSEMBLED");
    }

    #[test]
    fn test_rejections_are_errors() {
        assert_eq!(Event::InvocationRejected.severity(), Severity::Error);
        assert_eq!(Event::PageRejected.severity(), Severity::Error);
        assert_eq!(Event::CursorCloseFailed.severity(), Severity::Warn);
        assert_eq!(Event::ResponseWriteFailed.severity(), Severity::Warn);
    }
}
