//! Session token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use registry_core::config::AuthConfig;
use registry_core::error::AppError;

use super::claims::Claims;
use crate::TOKEN_VALIDITY_SECONDS;

/// Creates HS256-signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl.num_seconds())
            .finish()
    }
}

/// A freshly minted token and its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact signed token string.
    pub token: String,
    /// Claims embedded in the token.
    pub claims: Claims,
}

impl IssuedToken {
    /// Returns the expiration instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.claims.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl JwtEncoder {
    /// Creates an encoder from auth configuration with the standard lifetime.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::seconds(TOKEN_VALIDITY_SECONDS),
        }
    }

    /// Signs a token for `email`, issued at `now`.
    pub fn issue(&self, email: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, claims })
    }
}
