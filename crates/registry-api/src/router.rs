//! Route definitions for the registry HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(auth_routes())
        .merge(payment_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// User registry endpoints: list, create, update
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route("/users/{id}", put(handlers::user::update_user))
}

/// Token issuance and session validation
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", post(handlers::auth::authenticate))
        .route("/session", post(handlers::auth::validate_session))
}

/// Member-number payment lookups
fn payment_routes() -> Router<AppState> {
    Router::new().route(
        "/payments/{member_no}",
        get(handlers::payment::lookup_payment),
    )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
