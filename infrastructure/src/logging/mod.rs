//! Logging infrastructure: structured call auditing.
//!
//! Provides [`JsonlCallAuditLogger`], a JSONL file writer that implements
//! the [`CallAuditLogger`](toolgate_application::CallAuditLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlCallAuditLogger;
