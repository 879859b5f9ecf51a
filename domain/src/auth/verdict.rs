//! Authentication verdicts

/// Reason an authentication check failed.
///
/// The reason strings are the only detail ever shown to a caller. Distinct
/// cryptographic failures (bad signature, expiry, malformed token) all
/// collapse into [`AuthFailure::InvalidToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    TokenRequired,
    InvalidToken,
    InvalidTenant,
}

impl AuthFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            AuthFailure::TokenRequired => "token required",
            AuthFailure::InvalidToken => "invalid or expired token",
            AuthFailure::InvalidTenant => "invalid tenant",
        }
    }
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Outcome of validating one credential pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthVerdict {
    pub valid: bool,
    pub reason: String,
}

impl AuthVerdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: "ok".to_string(),
        }
    }

    pub fn denied(failure: AuthFailure) -> Self {
        Self {
            valid: false,
            reason: failure.reason().to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<Result<(), AuthFailure>> for AuthVerdict {
    fn from(result: Result<(), AuthFailure>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(failure) => Self::denied(failure),
        }
    }
}
