//! Output formatting for tool results and listings

pub mod console;
pub mod formatter;
