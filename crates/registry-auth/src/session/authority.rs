//! Session authority: issues and validates email-bound session tokens.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use registry_core::config::AuthConfig;
use registry_core::error::AppError;
use registry_store::UserStore;

use super::outcome::{AuthOutcome, MOCK_PAYMENT_AMOUNT, PaymentView, SessionView};
use crate::TOKEN_VALIDITY_SECONDS;
use crate::jwt::{JwtDecoder, JwtEncoder};

/// Issues and validates session tokens against the user store.
///
/// Holds no per-session state: a token is self-contained and is re-checked
/// on every call.
#[derive(Clone)]
pub struct SessionAuthority {
    /// User record store.
    store: Arc<dyn UserStore>,
    /// Token signer.
    encoder: JwtEncoder,
    /// Token peeker and verifier.
    decoder: JwtDecoder,
    /// Source of "now" for issuance and expiry checks.
    clock: Arc<dyn Clock + Send + Sync>,
}

impl std::fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthority")
            .field("store", &self.store)
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl SessionAuthority {
    /// Creates an authority over `store`, signing with the configured secret.
    pub fn new(
        store: Arc<dyn UserStore>,
        config: &AuthConfig,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            store,
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            clock,
        }
    }

    /// Authenticates by email.
    ///
    /// An unknown email yields a `404` outcome rather than an error.
    pub async fn authenticate(&self, email: &str) -> Result<AuthOutcome, AppError> {
        let Some(user) = self.store.find_by_email(email).await? else {
            warn!(email = %email, "Authentication denied: user not registered");
            return Ok(AuthOutcome::not_registered());
        };

        let issued = self.encoder.issue(email, self.clock.utc())?;

        info!(
            user_id = %user.id,
            expires_at = %issued.expires_at(),
            "Session token issued"
        );

        Ok(AuthOutcome::issued(user, issued.token, TOKEN_VALIDITY_SECONDS))
    }

    /// Validates `token` for `email` and returns the subject's record.
    ///
    /// Checks, in order:
    /// 1. Embedded expiry, read without verifying the signature
    /// 2. Signature
    /// 3. The user exists
    /// 4. The token's subject equals `email`
    pub async fn validate_session(
        &self,
        token: &str,
        email: &str,
    ) -> Result<SessionView, AppError> {
        let peeked = self.decoder.peek(token)?;
        if peeked.is_expired_at(self.clock.utc()) {
            debug!(exp = peeked.exp, "Rejected expired token");
            return Err(AppError::token_expired("Token expired"));
        }

        let claims = self.decoder.verify(token).inspect_err(|e| {
            warn!(error = %e, "Token signature verification failed");
        })?;

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if claims.subject() != email {
            warn!(user_id = %user.id, "Token subject does not match supplied email");
            return Err(AppError::invalid_token("Invalid token"));
        }

        debug!(user_id = %user.id, "Session validated");

        Ok(SessionView {
            expired: TOKEN_VALIDITY_SECONDS,
            user,
        })
    }

    /// Looks up the payment due for a member number.
    pub async fn lookup_payment(&self, member_no: u32) -> Result<PaymentView, AppError> {
        let user = self
            .store
            .find_by_member_no(member_no)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(PaymentView {
            amount: MOCK_PAYMENT_AMOUNT,
            user,
        })
    }
}
