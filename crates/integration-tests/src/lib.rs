//! Integration tests for Cotton Row.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cotton-row-integration-tests
//! ```
//!
//! Each test starts its own storefront on `127.0.0.1:0`, so tests run in
//! parallel without sharing sessions or rate-limit buckets.
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Product listing, detail, and categories
//! - `storefront_device_state` - Cart, wishlist, and theme persistence
//! - `storefront_auth` - Stub login, register, and `me`
//!
//! # Example
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn test_storefront_health() {
//!     let ctx = TestContext::spawn().await;
//!     let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
//!     assert_eq!(resp.status(), 200);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use cotton_row_core::Catalog;
use cotton_row_storefront::config::{JwtConfig, SentryConfig, StorefrontConfig};
use cotton_row_storefront::{AppState, app};
use reqwest::Client;
use secrecy::SecretString;
use url::Url;

/// JWT secret that passes the storefront's strength checks.
pub const TEST_JWT_SECRET: &str = "aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%";

/// A running storefront plus a client that keeps its session cookie.
pub struct TestContext {
    pub client: Client,
    pub addr: SocketAddr,
}

impl TestContext {
    /// Start a storefront with rate limiting disabled.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Start a storefront, choosing whether rate limiting is on.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    pub async fn spawn_with(rate_limit: bool) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");

        let state = AppState::new(test_config(addr, rate_limit), Catalog::seed());
        let router = app(state);

        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        Self {
            client: Self::device(),
            addr,
        }
    }

    /// A fresh client with its own cookie jar, i.e. another device.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn device() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Storefront configuration for tests.
///
/// # Panics
///
/// Panics if the base URL built from `addr` is invalid.
#[must_use]
pub fn test_config(addr: SocketAddr, rate_limit: bool) -> StorefrontConfig {
    StorefrontConfig {
        host: addr.ip(),
        port: addr.port(),
        base_url: Url::parse(&format!("http://{addr}")).expect("Invalid test base URL"),
        jwt: JwtConfig {
            secret: SecretString::from(TEST_JWT_SECRET),
            expiry_days: 30,
            issuer: "cotton-row".to_string(),
        },
        rate_limit,
        sentry: SentryConfig::default(),
    }
}
