//! Tool domain module
//!
//! This module defines the core abstractions for remote-callable **tools**:
//! named operations an AI agent invokes over a request/response channel.
//!
//! # Overview
//!
//! Every tool is described by a [`ToolDefinition`] (name, parameters, risk
//! level), invoked via a [`ToolCall`], and answered with exactly one
//! [`ToolCallResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌────────────────────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolCallResult             │
//! │ (registry)   │    │ (invocation) │    │ success|pending|cancelled| │
//! └──────────────┘    └──────────────┘    │ error                      │
//!                                         └────────────────────────────┘
//! ```
//!
//! # Argument Presence
//!
//! Optional arguments distinguish *absent* from *empty*. A key that is missing
//! (or explicitly `null`) is absent; an empty string is present. Workflow
//! tools infer their step from presence, see [`crate::workflow`].
//!
//! # Risk Levels
//!
//! | Risk | Examples | Human confirmation |
//! |------|----------|--------------------|
//! | **Low** | `get_email` | No |
//! | **High** | `change_email` | Yes (Y/N step) |
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolHandler`, `ToolDispatcher`): handler seam and
//!   authenticated dispatch
//! - **Infrastructure**: HTTP transport and backend adapters

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::ToolCallResult;
