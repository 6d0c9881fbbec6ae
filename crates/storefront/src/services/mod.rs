//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Stub registration/login and bearer token issuing

pub mod auth;
