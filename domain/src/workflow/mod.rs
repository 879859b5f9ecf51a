//! Stateless workflow step inference
//!
//! Mutating tools run a human-in-the-loop protocol without any server-side
//! session. The step is re-derived from the arguments of each call:
//!
//! ```text
//! new_email absent                          → RequestValue       (pending)
//! new_email present, confirmation absent    → AwaitConfirmation  (pending)
//! confirmation present, not "Y"             → Cancelled          (terminal)
//! confirmation == "Y" (case-insensitive)    → Finalize           (mutation)
//! ```
//!
//! The first matching rule wins, so a fixed argument set always maps to the
//! same step. The caller owns workflow continuity: it must echo back every
//! field a pending result returns.

/// The only accepted confirmation token (compared case-insensitively)
pub const CONFIRMATION_ACCEPT: &str = "Y";

/// Intermediate step reported in a pending result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingStep {
    /// The mutation target has not been supplied yet
    RequestValue,
    /// The target is known; waiting for the user's Y/N answer
    Confirmation,
}

impl PendingStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PendingStep::RequestValue => "request_value",
            PendingStep::Confirmation => "confirmation",
        }
    }
}

impl std::fmt::Display for PendingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step of the change-email workflow inferred from one call's arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEmailStep<'a> {
    RequestValue,
    AwaitConfirmation { new_email: &'a str },
    Cancelled,
    Finalize { new_email: &'a str },
}

impl<'a> ChangeEmailStep<'a> {
    /// Infer the step from the optional arguments.
    ///
    /// `None` means the argument was absent from the call. Emptiness checks
    /// belong to argument extraction, not to inference.
    pub fn infer(new_email: Option<&'a str>, user_confirmation: Option<&str>) -> Self {
        let Some(new_email) = new_email else {
            return ChangeEmailStep::RequestValue;
        };
        match user_confirmation {
            None => ChangeEmailStep::AwaitConfirmation { new_email },
            Some(answer) if is_affirmative(answer) => ChangeEmailStep::Finalize { new_email },
            Some(_) => ChangeEmailStep::Cancelled,
        }
    }

    /// The pending step to report, if this step pauses the workflow
    pub fn pending(&self) -> Option<PendingStep> {
        match self {
            ChangeEmailStep::RequestValue => Some(PendingStep::RequestValue),
            ChangeEmailStep::AwaitConfirmation { .. } => Some(PendingStep::Confirmation),
            ChangeEmailStep::Cancelled | ChangeEmailStep::Finalize { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.pending().is_none()
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRMATION_ACCEPT)
}
