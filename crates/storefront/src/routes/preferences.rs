//! Theme preference handlers.

use axum::{Json, extract::rejection::JsonRejection};

use cotton_row_core::ThemePreference;

use crate::error::Result;
use crate::storage::DeviceStorage;

/// Current theme.
pub async fn show_theme(storage: DeviceStorage) -> Json<ThemePreference> {
    Json(storage.theme().await)
}

/// Set the theme explicitly.
pub async fn set_theme(
    storage: DeviceStorage,
    body: std::result::Result<Json<ThemePreference>, JsonRejection>,
) -> Result<Json<ThemePreference>> {
    let Json(requested) = body?;

    let mut theme = storage.theme().await;
    theme.set(requested.is_dark);
    storage.save_theme(&theme).await?;

    Ok(Json(theme))
}

/// Flip between light and dark.
pub async fn toggle_theme(storage: DeviceStorage) -> Result<Json<ThemePreference>> {
    let mut theme = storage.theme().await;
    theme.toggle();
    storage.save_theme(&theme).await?;

    Ok(Json(theme))
}
