//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Secret material for session token signing.
///
/// The secret is supplied externally (config file or
/// `REGISTRY__AUTH__JWT_SECRET`) and has no built-in default.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}
