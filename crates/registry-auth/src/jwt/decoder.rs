//! Session token decoding in two phases.
//!
//! [`JwtDecoder::peek`] reads the claims without checking the signature so
//! the caller can reject an elapsed token cheaply; [`JwtDecoder::verify`]
//! then checks the HS256 signature against the service secret. Expiry is
//! never judged by `jsonwebtoken` itself: the caller compares `exp` against
//! its own clock.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use registry_core::config::AuthConfig;
use registry_core::error::AppError;

use super::claims::Claims;

/// Decodes and verifies session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature-checking validation.
    strict: Validation,
    /// Signature-skipping validation for the expiry peek.
    unverified: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("strict", &self.strict)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut strict = Validation::new(Algorithm::HS256);
        strict.validate_exp = false;
        strict.leeway = 0;

        let mut unverified = Validation::new(Algorithm::HS256);
        unverified.validate_exp = false;
        unverified.insecure_disable_signature_validation();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            strict,
            unverified,
        }
    }

    /// Reads the claims without verifying the signature.
    ///
    /// Only for inspecting `exp`; nothing returned here is trusted.
    pub fn peek(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.unverified)
            .map(|data| data.claims)
            .map_err(|e| AppError::invalid_token(format!("Malformed token: {e}")))
    }

    /// Verifies the signature and returns the trusted claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.strict)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => AppError::invalid_token("Invalid token"),
                JwtErrorKind::InvalidAlgorithm => {
                    AppError::invalid_token("Invalid token algorithm")
                }
                _ => AppError::invalid_token(format!("Invalid token: {e}")),
            })
    }
}
