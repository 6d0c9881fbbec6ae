//! Session-related types.
//!
//! Device storage keys and the user record returned by the auth endpoints.

use serde::{Deserialize, Serialize};

use cotton_row_core::{UserId, UserRole};

/// User identity handed out by register/login and decoded from tokens.
///
/// Entirely synthetic; nothing backs it. The email is kept as given: only
/// registration checks its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Always serialized, as `null` when absent.
    pub avatar: Option<String>,
}

/// Session keys for per-device snapshots.
pub mod storage_keys {
    /// Cart engine snapshot.
    pub const CART: &str = "cart-storage";

    /// Wishlist engine snapshot.
    pub const WISHLIST: &str = "wishlist-storage";

    /// Theme preference snapshot.
    pub const THEME: &str = "theme-storage";
}
