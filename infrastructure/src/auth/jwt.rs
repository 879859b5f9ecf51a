//! HS256 token verification against a shared secret.
//!
//! Check order is fixed: token presence, then signature and expiry, then
//! tenant. Verification failures of any kind collapse into a single reason
//! so callers learn nothing about why a token was rejected.

use crate::config::FileAuthConfig;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use toolgate_application::AuthenticatorPort;
use toolgate_domain::{AuthFailure, AuthVerdict};
use tracing::debug;

/// Authenticator accepting HS256 tokens issued for one tenant
pub struct JwtAuthenticator {
    key: DecodingKey,
    validation: Validation,
    allowed_tenant: String,
}

impl JwtAuthenticator {
    pub fn new(secret: &str, allowed_tenant: impl Into<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is enforced when present but not mandatory
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;
        validation.leeway = 0;
        // Issuer-specific claims are not part of the contract
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            allowed_tenant: allowed_tenant.into(),
        }
    }

    /// Clock-skew tolerance applied to `exp`/`nbf`
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.validation.leeway = seconds;
        self
    }

    pub fn from_config(config: &FileAuthConfig) -> Self {
        Self::new(&config.secret, config.allowed_tenant.clone()).with_leeway(config.leeway_seconds)
    }

    fn check(&self, token: &str, tenant: &str) -> Result<(), AuthFailure> {
        if token.is_empty() {
            return Err(AuthFailure::TokenRequired);
        }

        if let Err(e) = decode::<serde_json::Value>(token, &self.key, &self.validation) {
            debug!(kind = ?e.kind(), "Token verification failed");
            return Err(AuthFailure::InvalidToken);
        }

        if tenant != self.allowed_tenant {
            return Err(AuthFailure::InvalidTenant);
        }

        Ok(())
    }
}

impl AuthenticatorPort for JwtAuthenticator {
    fn validate(&self, token: &str, tenant: &str) -> AuthVerdict {
        self.check(token, tenant).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    const SECRET: &str = "test-secret";
    const TENANT: &str = "test123";

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn mint(secret: &str, claims: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn authenticator() -> JwtAuthenticator {
        JwtAuthenticator::new(SECRET, TENANT)
    }

    #[test]
    fn test_valid_token_and_tenant() {
        let token = mint(SECRET, json!({"sub": "agent", "exp": now() + 3600}));
        let verdict = authenticator().validate(&token, TENANT);
        assert!(verdict.is_valid());
        assert_eq!(verdict.reason, "ok");
    }

    #[test]
    fn test_token_without_exp_accepted() {
        let token = mint(SECRET, json!({"sub": "agent"}));
        assert!(authenticator().validate(&token, TENANT).is_valid());
    }

    #[test]
    fn test_audience_and_issuer_claims_ignored() {
        let token = mint(
            SECRET,
            json!({
                "userId": "123",
                "aud": "account-api",
                "iss": "identity-service",
                "exp": now() + 3600,
            }),
        );
        let verdict = authenticator().validate(&token, TENANT);
        assert!(verdict.is_valid(), "denied: {}", verdict.reason);

        let token = mint(SECRET, json!({"aud": ["a", "b"]}));
        assert!(authenticator().validate(&token, TENANT).is_valid());
    }

    #[test]
    fn test_empty_token() {
        let verdict = authenticator().validate("", TENANT);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.reason, "token required");
    }

    #[test]
    fn test_rejected_tokens_share_one_reason() {
        let cases = [
            mint("other-secret", json!({"sub": "agent"})),
            mint(SECRET, json!({"sub": "agent", "exp": now() - 3600})),
            "not.a.token".to_string(),
            "garbage".to_string(),
        ];
        for token in cases {
            let verdict = authenticator().validate(&token, TENANT);
            assert!(!verdict.is_valid());
            assert_eq!(verdict.reason, "invalid or expired token");
        }
    }

    #[test]
    fn test_signature_checked_before_tenant() {
        let forged = mint("other-secret", json!({"sub": "agent"}));
        let verdict = authenticator().validate(&forged, "wrong");
        assert_eq!(verdict.reason, "invalid or expired token");
    }

    #[test]
    fn test_wrong_tenant() {
        let token = mint(SECRET, json!({"sub": "agent"}));
        for tenant in ["", "test1234", "TEST123"] {
            let verdict = authenticator().validate(&token, tenant);
            assert_eq!(verdict.reason, "invalid tenant");
        }
    }

    #[test]
    fn test_leeway_tolerates_recent_expiry() {
        let token = mint(SECRET, json!({"exp": now() - 30}));
        assert!(!authenticator().validate(&token, TENANT).is_valid());
        assert!(
            authenticator()
                .with_leeway(120)
                .validate(&token, TENANT)
                .is_valid()
        );
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let token = encode(
            &Header::new(Algorithm::HS512),
            &json!({"sub": "agent"}),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(
            authenticator().validate(&token, TENANT).reason,
            "invalid or expired token"
        );
    }
}
