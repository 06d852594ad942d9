//! Pluggable logging seam for the loaders.
//!
//! Responsibilities:
//! - Define the two-operation `Logger` capability injected into `ConfigLoader`.
//! - Provide a no-op default and a `tracing`-backed implementation.
//!
//! Invariants:
//! - Loggers only observe; they never change control flow or swallow errors.

use std::collections::BTreeMap;
use std::error::Error;

/// Structured fields attached to a log event.
pub type Fields = BTreeMap<&'static str, String>;

/// Notification sink invoked by loaders on success and failure.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str, fields: &Fields);
    fn error(&self, message: &str, error: &dyn Error, fields: &Fields);
}

/// Discards every event. Used when no logger is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str, _fields: &Fields) {}

    fn error(&self, _message: &str, _error: &dyn Error, _fields: &Fields) {}
}

/// Forwards events to the `tracing` subscriber installed by the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, fields: &Fields) {
        tracing::info!(?fields, "{}", message);
    }

    fn error(&self, message: &str, error: &dyn Error, fields: &Fields) {
        tracing::error!(error = %error, ?fields, "{}", message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// A recorded log event: (level, message, fields).
    pub type Event = (&'static str, String, Fields);

    /// Logger that records every event for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingLogger {
        pub events: Mutex<Vec<Event>>,
    }

    impl RecordingLogger {
        pub fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str, fields: &Fields) {
            self.events
                .lock()
                .unwrap()
                .push(("info", message.to_string(), fields.clone()));
        }

        fn error(&self, message: &str, error: &dyn Error, fields: &Fields) {
            let mut fields = fields.clone();
            fields.insert("error", error.to_string());
            self.events
                .lock()
                .unwrap()
                .push(("error", message.to_string(), fields));
        }
    }
}
