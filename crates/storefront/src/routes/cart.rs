//! Cart route handlers.
//!
//! The cart lives in device storage. Each handler loads the snapshot, applies
//! one engine operation, saves it back, and returns the resulting cart view.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use cotton_row_core::{Cart, CartLineItem, LineIdentity, Product, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::storage::DeviceStorage;

/// Cart response: line items plus derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub total_items: u64,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        let total_price = cart.total_price();
        let total_items = cart.total_items();
        Self {
            items: cart.items().to_vec(),
            total_price,
            total_items,
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: Option<i64>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Optional variant selector for removal.
#[derive(Debug, Default, Deserialize)]
pub struct VariantQuery {
    pub size: Option<String>,
    pub color: Option<String>,
}

impl VariantQuery {
    /// Drop empty values so `?size=` reads as no selection.
    fn normalized(self) -> Self {
        Self {
            size: selection(self.size),
            color: selection(self.color),
        }
    }

    fn is_empty(&self) -> bool {
        self.size.is_none() && self.color.is_none()
    }
}

/// Treat empty strings as "no selection".
fn selection(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Reject sizes and colors the product does not come in.
fn validate_variant(
    product: &Product,
    size: Option<&str>,
    color: Option<&str>,
) -> Result<()> {
    if let Some(size) = size
        && !product.offers_size(size)
    {
        return Err(AppError::BadRequest(format!(
            "Size {size} is not available for {}",
            product.name
        )));
    }
    if let Some(color) = color
        && !product.offers_color(color)
    {
        return Err(AppError::BadRequest(format!(
            "Color {color} is not available for {}",
            product.name
        )));
    }
    Ok(())
}

/// Show the current cart.
pub async fn show(storage: DeviceStorage) -> Json<CartView> {
    Json(storage.cart().await.into())
}

/// Add an item, merging into an existing line with the same size and color.
#[instrument(skip(state, storage))]
pub async fn add(
    State(state): State<AppState>,
    storage: DeviceStorage,
    body: std::result::Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartView>> {
    let Json(body) = body?;

    let quantity = body.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }
    let quantity = u32::try_from(quantity)
        .map_err(|_| AppError::BadRequest("Quantity is too large".to_string()))?;

    let product = state
        .catalog()
        .get(&body.product_id)
        .cloned()
        .ok_or_else(AppError::product_not_found)?;

    let size = selection(body.size);
    let color = selection(body.color);
    validate_variant(&product, size.as_deref(), color.as_deref())?;

    let mut cart = storage.cart().await;
    cart.add_item(CartLineItem::new(product, quantity, size, color));
    storage.save_cart(&cart).await?;

    add_breadcrumb(
        "cart",
        "Added item",
        Some(&[("product_id", body.product_id.as_str())]),
    );
    tracing::info!(product_id = %body.product_id, quantity, "Added to cart");

    Ok(Json(cart.into()))
}

/// Set the quantity of every line for a product. Values below 1 become 1.
#[instrument(skip(storage))]
pub async fn update(
    storage: DeviceStorage,
    Path(product_id): Path<String>,
    body: std::result::Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> Result<Json<CartView>> {
    let Json(body) = body?;
    let product_id = ProductId::new(product_id);

    let mut cart = storage.cart().await;
    if cart.update_quantity(&product_id, body.quantity) {
        storage.save_cart(&cart).await?;
        add_breadcrumb(
            "cart",
            "Updated quantity",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    Ok(Json(cart.into()))
}

/// Remove a product from the cart.
///
/// With a `size` or `color` query only the matching line is removed,
/// otherwise every variant of the product.
#[instrument(skip(storage))]
pub async fn remove(
    storage: DeviceStorage,
    Path(product_id): Path<String>,
    Query(variant): Query<VariantQuery>,
) -> Result<Json<CartView>> {
    let product_id = ProductId::new(product_id);
    let variant = variant.normalized();

    let mut cart = storage.cart().await;
    let removed = if variant.is_empty() {
        cart.remove_item(&product_id)
    } else {
        cart.remove_line(&LineIdentity::new(
            product_id.clone(),
            variant.size,
            variant.color,
        ))
    };

    if removed {
        storage.save_cart(&cart).await?;
        add_breadcrumb(
            "cart",
            "Removed item",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    Ok(Json(cart.into()))
}

/// Empty the cart.
#[instrument(skip(storage))]
pub async fn clear(storage: DeviceStorage) -> Result<Json<CartView>> {
    let mut cart = storage.cart().await;
    cart.clear();
    storage.save_cart(&cart).await?;

    add_breadcrumb("cart", "Cleared cart", None);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_variant_values_mean_no_selection() {
        let variant = VariantQuery {
            size: Some(String::new()),
            color: Some(String::new()),
        }
        .normalized();
        assert!(variant.is_empty());

        let variant = VariantQuery {
            size: Some("M".to_string()),
            color: Some(String::new()),
        }
        .normalized();
        assert_eq!(variant.size.as_deref(), Some("M"));
        assert!(variant.color.is_none());
    }
}
