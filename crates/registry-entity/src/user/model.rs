//! User entity model.

use serde::{Deserialize, Serialize};

use super::id::{generate_member_no, generate_user_id};

/// A registered member.
///
/// `id` and `member_no` are assigned once at creation and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque unique identifier (20 hex characters).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address, used as the natural lookup key.
    pub email: String,
    /// Secondary numeric key, e.g. for payment lookups.
    pub member_no: u32,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl NewUser {
    /// Creates the input for a new user record.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Materializes the record, generating its `id` and `member_no`.
    pub fn into_record(self) -> UserRecord {
        UserRecord {
            id: generate_user_id(),
            name: self.name,
            email: self.email,
            member_no: generate_member_no(),
        }
    }
}

/// Partial update for an existing user. Only `Some` fields overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

impl UserPatch {
    /// Merges the supplied fields into `record`.
    pub fn apply(&self, record: &mut UserRecord) {
        if let Some(name) = &self.name {
            record.name.clone_from(name);
        }
        if let Some(email) = &self.email {
            record.email.clone_from(email);
        }
    }
}
