//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mockable::Clock;

use registry_auth::SessionAuthority;
use registry_core::config::AppConfig;
use registry_store::UserStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User record store
    pub user_store: Arc<dyn UserStore>,
    /// Token issuance and validation
    pub session_authority: Arc<SessionAuthority>,
}

impl AppState {
    /// Wires the session authority over `user_store` using the configured
    /// secret and the given clock.
    pub fn new(
        config: AppConfig,
        user_store: Arc<dyn UserStore>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        let session_authority = Arc::new(SessionAuthority::new(
            Arc::clone(&user_store),
            &config.auth,
            clock,
        ));

        Self {
            config: Arc::new(config),
            user_store,
            session_authority,
        }
    }
}
