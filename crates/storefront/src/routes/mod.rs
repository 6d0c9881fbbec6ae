//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness check
//! GET    /health/ready                    - Readiness check
//!
//! # Catalog
//! GET    /api/products                    - Filtered, sorted, paginated listing
//! GET    /api/products/{id}               - Product detail
//! GET    /api/categories                  - Categories with product counts
//!
//! # Auth (stub)
//! POST   /api/auth/login                  - Login, returns token
//! POST   /api/auth/register               - Register, returns token
//! GET    /api/auth/me                     - User for a bearer token
//!
//! # Cart (device storage)
//! GET    /api/cart                        - Cart with totals
//! POST   /api/cart/items                  - Add item (merges same size/color)
//! PATCH  /api/cart/items/{product_id}     - Set quantity
//! DELETE /api/cart/items/{product_id}     - Remove item (?size&color for one line)
//! DELETE /api/cart                        - Clear cart
//!
//! # Wishlist (device storage)
//! GET    /api/wishlist                    - Wishlist
//! POST   /api/wishlist/toggle             - Add or remove a product
//! GET    /api/wishlist/{product_id}       - Membership check
//! DELETE /api/wishlist/{product_id}       - Remove a product
//!
//! # Preferences (device storage)
//! GET    /api/preferences/theme           - Current theme
//! PUT    /api/preferences/theme           - Set theme
//! POST   /api/preferences/theme/toggle    - Toggle theme
//! ```

pub mod auth;
pub mod cart;
pub mod preferences;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{
    api_rate_limiter, auth_rate_limiter, create_session_layer, rate_limited_json,
    request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/me", get(auth::me))
}

/// Create the catalog, cart, wishlist, and preference routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/categories", get(products::categories))
        .route("/cart", get(cart::show).delete(cart::clear))
        .route("/cart/items", post(cart::add))
        .route(
            "/cart/items/{product_id}",
            patch(cart::update).delete(cart::remove),
        )
        .route("/wishlist", get(wishlist::show))
        .route("/wishlist/toggle", post(wishlist::toggle))
        .route(
            "/wishlist/{product_id}",
            get(wishlist::contains).delete(wishlist::remove),
        )
        .route(
            "/preferences/theme",
            get(preferences::show_theme).put(preferences::set_theme),
        )
        .route("/preferences/theme/toggle", post(preferences::toggle_theme))
}

/// Build the complete application: routes, middleware, and state.
pub fn app(state: AppState) -> Router {
    let mut auth = auth_routes();
    let mut api = api_routes();
    if state.config().rate_limit {
        auth = auth
            .layer(auth_rate_limiter())
            .layer(axum_middleware::map_response(rate_limited_json));
        api = api
            .layer(api_rate_limiter())
            .layer(axum_middleware::map_response(rate_limited_json));
    }

    // Nested after layering so each group keeps only its own limiter
    let api = api.nest("/auth", auth);
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", api)
        .layer(session_layer)
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until the catalog has products.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
