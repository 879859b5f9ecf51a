//! Authenticator port
//!
//! Defines how the application layer judges a caller's credential pair.

use toolgate_domain::AuthVerdict;

/// Port for credential validation
///
/// Implementations must be pure: no I/O and no retries. A failed verdict is
/// final for that call; the caller has to obtain a new token and retry the
/// whole call.
///
/// Verdict reasons are shown to callers verbatim, so implementations must
/// only ever return the fixed reasons from
/// [`AuthFailure`](toolgate_domain::AuthFailure), never error text from the
/// underlying verification library.
pub trait AuthenticatorPort: Send + Sync {
    /// Validate a token and tenant pair
    fn validate(&self, token: &str, tenant: &str) -> AuthVerdict;
}
