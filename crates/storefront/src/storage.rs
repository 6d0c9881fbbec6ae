//! Per-device snapshot storage.
//!
//! Cart, wishlist, and theme state live in the server-side session identified
//! by the session cookie, one JSON snapshot per key. Handlers load a snapshot,
//! mutate the owned engine, and save it back. Concurrent writes from the same
//! device are last-write-wins.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tower_sessions::Session;

use cotton_row_core::{Cart, ThemePreference, Wishlist};

use crate::error::AppError;
use crate::models::storage_keys;

/// Errors writing a snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No session layer in front of the handler.
    #[error("session layer missing")]
    Unavailable,

    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Extractor giving handlers typed access to the device's snapshots.
#[derive(Debug, Clone)]
pub struct DeviceStorage {
    session: Session,
}

impl<S> FromRequestParts<S> for DeviceStorage
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { session })
    }
}

impl DeviceStorage {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Load the snapshot under `key`.
    ///
    /// Missing or unreadable snapshots yield the default value; unreadable
    /// ones are logged and will be overwritten by the next save.
    pub async fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.session.get::<T>(key).await {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unreadable device snapshot");
                T::default()
            }
        }
    }

    /// Replace the snapshot under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Session` if the session store rejects the write.
    pub async fn save<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + Sync,
    {
        self.session.insert(key, value).await?;
        Ok(())
    }

    pub async fn cart(&self) -> Cart {
        self.load(storage_keys::CART).await
    }

    /// # Errors
    ///
    /// See [`DeviceStorage::save`].
    pub async fn save_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        self.save(storage_keys::CART, cart).await
    }

    pub async fn wishlist(&self) -> Wishlist {
        self.load(storage_keys::WISHLIST).await
    }

    /// # Errors
    ///
    /// See [`DeviceStorage::save`].
    pub async fn save_wishlist(&self, wishlist: &Wishlist) -> Result<(), StorageError> {
        self.save(storage_keys::WISHLIST, wishlist).await
    }

    pub async fn theme(&self) -> ThemePreference {
        self.load(storage_keys::THEME).await
    }

    /// # Errors
    ///
    /// See [`DeviceStorage::save`].
    pub async fn save_theme(&self, theme: &ThemePreference) -> Result<(), StorageError> {
        self.save(storage_keys::THEME, theme).await
    }
}
