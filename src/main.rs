//! Member Registry Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use registry_api::state::AppState;
use registry_core::config::AppConfig;
use registry_core::error::AppError;
use registry_entity::user::NewUser;
use registry_store::{MemoryUserStore, UserStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("REGISTRY_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting member registry v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: User store + seed data ───────────────────────────
    let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    seed_users(user_store.as_ref(), &config).await?;

    // ── Step 2: Session authority + router ───────────────────────
    let addr = config.server.bind_address();
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, user_store, Arc::new(mockable::DefaultClock));
    let app = registry_api::build_router(state);

    // ── Step 3: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Member registry listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    shutdown_signal().await;
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(grace, server).await {
        Ok(Ok(result)) => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
        }
        Ok(Err(e)) => {
            return Err(AppError::internal(format!("Server task failed: {}", e)));
        }
        Err(_) => tracing::warn!(
            grace_seconds = grace.as_secs(),
            "Connections still open after grace period, exiting"
        ),
    }

    tracing::info!("Member registry shut down gracefully");
    Ok(())
}

/// Create the configured seed users
async fn seed_users(store: &dyn UserStore, config: &AppConfig) -> Result<(), AppError> {
    for seed in &config.seed.users {
        let user = store
            .create(NewUser::new(seed.name.clone(), seed.email.clone()))
            .await?;
        tracing::info!(
            user_id = %user.id,
            member_no = user.member_no,
            "Seeded user '{}'",
            user.name
        );
    }
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
