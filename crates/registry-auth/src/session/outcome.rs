//! Result values returned by the session authority.

use serde::{Deserialize, Serialize};

use registry_entity::user::UserRecord;

/// Status code carried by an issued authentication outcome.
pub const STATUS_ISSUED: u16 = 200;
/// Status code carried by a denied authentication outcome.
pub const STATUS_NOT_REGISTERED: u16 = 404;

/// Mock amount returned by every payment lookup.
pub const MOCK_PAYMENT_AMOUNT: u64 = 500_000;

/// Result of an authentication attempt.
///
/// Denial is a normal value: callers branch on `code`, not on an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    /// `200` when a token was issued, `404` when the email is unknown.
    pub code: u16,
    /// Human-readable status message.
    pub message: String,
    /// Signed session token; empty when denied.
    pub token: String,
    /// Validity window in seconds; `0` when denied.
    pub expired: i64,
    /// User id; empty when denied.
    pub id: String,
    /// User name; empty when denied.
    pub name: String,
    /// User email; empty when denied.
    pub email: String,
    /// Member number; absent when denied.
    pub member_no: Option<u32>,
}

impl AuthOutcome {
    /// Builds the success outcome for `user`.
    pub fn issued(user: UserRecord, token: String, validity_seconds: i64) -> Self {
        Self {
            code: STATUS_ISSUED,
            message: "Success".to_string(),
            token,
            expired: validity_seconds,
            id: user.id,
            name: user.name,
            email: user.email,
            member_no: Some(user.member_no),
        }
    }

    /// Builds the denial outcome with empty identity fields.
    pub fn not_registered() -> Self {
        Self {
            code: STATUS_NOT_REGISTERED,
            message: "User is not registered, please sign up first".to_string(),
            token: String::new(),
            expired: 0,
            id: String::new(),
            name: String::new(),
            email: String::new(),
            member_no: None,
        }
    }

    /// Returns `true` when a token was issued.
    pub fn is_issued(&self) -> bool {
        self.code == STATUS_ISSUED
    }
}

/// A validated session: the subject's record plus the advertised window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Fixed validity window, not the token's remaining lifetime.
    pub expired: i64,
    /// The subject's record.
    #[serde(flatten)]
    pub user: UserRecord,
}

/// Payment lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentView {
    /// Amount due.
    pub amount: u64,
    /// The member's record.
    #[serde(flatten)]
    pub user: UserRecord,
}
