//! Claims embedded in every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the email the token was issued for.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the subject email.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Checks whether the token has expired at `now`. A token is valid only
    /// strictly before its `exp` instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
