//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure. Everything is
//! mounted under `/api`.

pub mod email;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod notification;
pub mod payment;
pub mod reminder;
pub mod state;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use error::ReminderApiError;
pub use extract::JsonBody;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use state::AppState;

/// Create the complete API router.
///
/// # Routes
/// - `/api/reminders` - Reminder management (authenticated)
/// - `/api/notifications` - Notification feed (authenticated)
/// - `/api/emails` - Due-reminder sweep and test email
/// - `/api/payments` - Checkout, verification and webhooks
///
/// Only the reminder and notification routes resolve the caller. Payment and
/// email routes never look at the `Authorization` header, so a stale session
/// cannot block a payment from being recorded.
pub fn api_router(state: AppState, auth: AuthState) -> Router {
    let resolve_caller = axum::middleware::from_fn_with_state(auth, auth_middleware);

    let api = Router::new()
        .nest("/reminders", reminder::reminder_routes().route_layer(resolve_caller.clone()))
        .nest("/notifications", notification::notification_routes().route_layer(resolve_caller))
        .nest("/emails", email::email_routes())
        .nest("/payments", payment::payment_routes())
        .with_state(state);

    Router::new().nest("/api", api)
}

/// Wraps a router with request tracing, the request timeout and CORS.
pub fn with_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// CORS from the configured origins; any origin when none are configured.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-user-id"),
        ]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
