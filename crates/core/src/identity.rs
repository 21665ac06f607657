//! Visitor identity.
//!
//! There is no authentication: a visitor is whoever owns the e-mail address
//! they typed in. [`NormalizedEmail`] can only be built through
//! [`NormalizedEmail::parse`], so every store call keyed by e-mail receives a
//! trimmed, lowercased, syntactically valid address.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;

/// User-facing message for a missing or malformed e-mail address.
pub const EMAIL_REQUIRED_MESSAGE: &str = "We need your email to remind you in 90 days.";

/// A trimmed, lowercased e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
    /// Normalize and validate a raw e-mail address.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let email = normalize_email(raw);
        if email.is_empty() || !email.contains('@') || !email.validate_email() {
            return Err(CoreError::Validation(EMAIL_REQUIRED_MESSAGE.to_string()));
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NormalizedEmail {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NormalizedEmail> for String {
    fn from(value: NormalizedEmail) -> Self {
        value.0
    }
}

/// Lowercase and trim an e-mail address without validating it.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The visitor an operation acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: NormalizedEmail,
}

impl Identity {
    pub fn new(email: NormalizedEmail) -> Self {
        Self { email }
    }
}
