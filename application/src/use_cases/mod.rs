//! Use cases
//!
//! Each tool exposed to the agent is a use case implementing
//! [`ToolHandler`](crate::ports::tool_handler::ToolHandler).
//!
//! | Tool | Use case | Backend call |
//! |------|----------|--------------|
//! | `get_email` | [`get_email::GetEmailUseCase`] | read |
//! | `change_email` | [`change_email::ChangeEmailUseCase`] | mutation, after Y/N confirmation |

pub mod change_email;
pub mod get_email;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
