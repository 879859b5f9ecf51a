//! Account identifiers
//!
//! Accounts are addressed by a fixed-length numeric identifier. The length
//! bounds come from configuration ([`AccountIdPolicy`]); the default matches
//! the backend's rule of 5 to 10 ASCII digits.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Length bounds for a valid account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdPolicy {
    pub min_digits: usize,
    pub max_digits: usize,
}

impl Default for AccountIdPolicy {
    fn default() -> Self {
        Self {
            min_digits: 5,
            max_digits: 10,
        }
    }
}

impl AccountIdPolicy {
    pub fn new(min_digits: usize, max_digits: usize) -> Result<Self, DomainError> {
        if min_digits == 0 {
            return Err(DomainError::InvalidPolicy(
                "min_digits must be at least 1".to_string(),
            ));
        }
        if min_digits > max_digits {
            return Err(DomainError::InvalidPolicy(format!(
                "min_digits ({}) exceeds max_digits ({})",
                min_digits, max_digits
            )));
        }
        Ok(Self {
            min_digits,
            max_digits,
        })
    }

    /// Parse a raw identifier against this policy
    pub fn parse(&self, raw: &str) -> Result<AccountId, DomainError> {
        let within_bounds = (self.min_digits..=self.max_digits).contains(&raw.len());
        if within_bounds && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(AccountId(raw.to_string()))
        } else {
            Err(DomainError::InvalidAccountId {
                min: self.min_digits,
                max: self.max_digits,
            })
        }
    }
}

/// A validated account identifier.
///
/// Only constructed through [`AccountIdPolicy::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
