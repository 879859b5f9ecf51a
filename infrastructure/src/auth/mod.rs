//! Authentication adapters.
//!
//! Provides [`JwtAuthenticator`], the HS256 implementation of the
//! [`AuthenticatorPort`](toolgate_application::AuthenticatorPort).

mod jwt;

pub use jwt::JwtAuthenticator;
