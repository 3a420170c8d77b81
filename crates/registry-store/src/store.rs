//! User store trait.

use async_trait::async_trait;

use registry_core::result::AppResult;
use registry_entity::user::{NewUser, UserPatch, UserRecord};

/// Owned collection of user records looked up by email and member number.
///
/// Lookups return `Ok(None)` when nothing matches; absence is not an error.
/// When several records share an email, lookups return the first one in
/// insertion order.
///
/// Implementations must serialize writes and must never let a read observe
/// a half-applied write.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Returns all records in insertion order.
    async fn list(&self) -> AppResult<Vec<UserRecord>>;

    /// Returns the first record whose email equals `email`.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Returns the first record whose member number equals `member_no`.
    async fn find_by_member_no(&self, member_no: u32) -> AppResult<Option<UserRecord>>;

    /// Creates and appends a record with a generated id and member number.
    ///
    /// Email uniqueness is not checked.
    async fn create(&self, user: NewUser) -> AppResult<UserRecord>;

    /// Merges `patch` into the record with the given id.
    ///
    /// Returns `Ok(None)` and leaves the store untouched when no record has
    /// that id.
    async fn update(&self, id: &str, patch: UserPatch) -> AppResult<Option<UserRecord>>;

    /// Returns the number of stored records.
    async fn count(&self) -> AppResult<usize>;
}
