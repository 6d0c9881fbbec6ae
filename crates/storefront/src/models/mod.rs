//! Domain models for storefront.

pub mod session;

pub use session::{SessionUser, storage_keys};
