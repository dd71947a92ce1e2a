//! Trace ids for correlating the log lines of one user action.
//!
//! Each navigation opens a span carrying a fresh id; every endpoint call,
//! timer and toast logged while it runs inherits the span.

use uuid::Uuid;

/// Generate a new trace id
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}
