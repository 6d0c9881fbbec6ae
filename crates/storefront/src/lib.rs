//! Cotton Row storefront library.
//!
//! JSON API for the catalog, stub authentication, and the per-device cart,
//! wishlist, and theme. Exposed as a library so the binary and the
//! integration tests build the same router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

pub use routes::app;
pub use state::AppState;
