//! In-memory user store using a Tokio read-write lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use registry_core::result::AppResult;
use registry_entity::user::{NewUser, UserPatch, UserRecord};

use super::store::UserStore;

/// In-memory user store.
///
/// Records live in a `Vec` in insertion order behind a single `RwLock`:
/// writers hold the lock exclusively, so `create` and `update` are
/// serialized and readers only see fully applied writes. Lookups are
/// linear scans. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Protected record collection.
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let users = self.users.read().await;
        let found = users.iter().find(|u| u.email == email).cloned();
        debug!(email = %email, found = found.is_some(), "Lookup by email");
        Ok(found)
    }

    async fn find_by_member_no(&self, member_no: u32) -> AppResult<Option<UserRecord>> {
        let users = self.users.read().await;
        let found = users.iter().find(|u| u.member_no == member_no).cloned();
        debug!(member_no, found = found.is_some(), "Lookup by member number");
        Ok(found)
    }

    async fn create(&self, user: NewUser) -> AppResult<UserRecord> {
        let record = user.into_record();

        let mut users = self.users.write().await;
        users.push(record.clone());

        info!(
            user_id = %record.id,
            member_no = record.member_no,
            total = users.len(),
            "User created"
        );

        Ok(record)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> AppResult<Option<UserRecord>> {
        let mut users = self.users.write().await;

        let Some(record) = users.iter_mut().find(|u| u.id == id) else {
            debug!(user_id = %id, "Update skipped, no such user");
            return Ok(None);
        };

        patch.apply(record);
        info!(user_id = %id, "User updated");

        Ok(Some(record.clone()))
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}
