//! CORS layer built from `[server.cors]`.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing::warn;

use registry_core::config::CorsConfig;

const WILDCARD: &str = "*";

/// Builds the CORS layer for the registry API.
///
/// `"*"` in the origin or header list allows any value. Entries that do
/// not parse are skipped with a warning instead of failing startup.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if is_wildcard(&config.allowed_origins) {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parse_entries::<HeaderValue>("origin", &config.allowed_origins))
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::from(Any)
    } else {
        AllowHeaders::list(parse_entries::<HeaderName>("header", &config.allowed_headers))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(parse_entries::<Method>("method", &config.allowed_methods))
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e == WILDCARD)
}

fn parse_entries<T: FromStr>(kind: &'static str, entries: &[String]) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| {
            let parsed = entry.parse().ok();
            if parsed.is_none() {
                warn!(kind, entry = %entry, "Ignoring unparsable CORS entry");
            }
            parsed
        })
        .collect()
}
