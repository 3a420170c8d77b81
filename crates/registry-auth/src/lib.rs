//! # registry-auth
//!
//! Session token issuance and validation for the member registry.
//!
//! ## Modules
//!
//! - `jwt`: claims, HS256 signing, and the two-phase (peek, then verify)
//!   decoder
//! - `session`: [`SessionAuthority`], which issues tokens by email, validates
//!   presented tokens, and looks up payments by member number

pub mod jwt;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use session::{AuthOutcome, PaymentView, SessionAuthority, SessionView};

/// Lifetime of every issued token, in seconds. Also echoed to callers as the
/// validity window.
pub const TOKEN_VALIDITY_SECONDS: i64 = 600;
