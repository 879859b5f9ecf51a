//! Account backend adapters.

mod http;

pub use http::{BACKEND_TENANT_HEADER, HttpAccountBackend};
