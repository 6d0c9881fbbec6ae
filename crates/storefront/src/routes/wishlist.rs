//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use cotton_row_core::{ProductId, Wishlist, WishlistEntry};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::storage::DeviceStorage;

/// Wishlist response.
#[derive(Debug, Serialize)]
pub struct WishlistView {
    pub items: Vec<WishlistEntry>,
    pub count: usize,
}

impl From<Wishlist> for WishlistView {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            count: wishlist.len(),
            items: wishlist.items().to_vec(),
        }
    }
}

/// Toggle response: new membership plus the resulting wishlist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub in_wishlist: bool,
    #[serde(flatten)]
    pub wishlist: WishlistView,
}

/// Membership check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub product_id: ProductId,
    pub in_wishlist: bool,
}

/// Toggle request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub product_id: ProductId,
}

/// Show the current wishlist.
pub async fn show(storage: DeviceStorage) -> Json<WishlistView> {
    Json(storage.wishlist().await.into())
}

/// Add the product if absent, otherwise remove it.
#[instrument(skip(state, storage))]
pub async fn toggle(
    State(state): State<AppState>,
    storage: DeviceStorage,
    body: std::result::Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<ToggleResponse>> {
    let Json(body) = body?;

    let product = state
        .catalog()
        .get(&body.product_id)
        .cloned()
        .ok_or_else(AppError::product_not_found)?;

    let mut wishlist = storage.wishlist().await;
    let in_wishlist = wishlist.toggle(WishlistEntry::new(product));
    storage.save_wishlist(&wishlist).await?;

    add_breadcrumb(
        "wishlist",
        if in_wishlist { "Added to wishlist" } else { "Removed from wishlist" },
        Some(&[("product_id", body.product_id.as_str())]),
    );

    Ok(Json(ToggleResponse {
        in_wishlist,
        wishlist: wishlist.into(),
    }))
}

/// Whether a product is in the wishlist.
pub async fn contains(
    storage: DeviceStorage,
    Path(product_id): Path<String>,
) -> Json<MembershipResponse> {
    let product_id = ProductId::new(product_id);
    let in_wishlist = storage.wishlist().await.is_in_wishlist(&product_id);

    Json(MembershipResponse {
        product_id,
        in_wishlist,
    })
}

/// Remove every entry for a product.
#[instrument(skip(storage))]
pub async fn remove(
    storage: DeviceStorage,
    Path(product_id): Path<String>,
) -> Result<Json<WishlistView>> {
    let product_id = ProductId::new(product_id);

    let mut wishlist = storage.wishlist().await;
    if wishlist.remove_product(&product_id) {
        storage.save_wishlist(&wishlist).await?;
        add_breadcrumb(
            "wishlist",
            "Removed from wishlist",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    Ok(Json(wishlist.into()))
}
