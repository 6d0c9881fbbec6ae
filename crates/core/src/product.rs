//! Catalog product record.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product as listed in the catalog.
///
/// Read-only from the storefront's point of view: carts and wishlists hold
/// snapshots of it, they never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Price before markdown, when the product is on sale.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub stock: u32,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Available sizes, in display order.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Available colors, in display order.
    #[serde(default)]
    pub colors: Vec<String>,
    pub is_new: bool,
    pub is_sale: bool,
    pub rating: f64,
}

impl Product {
    /// New arrival or on sale.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.is_new || self.is_sale
    }

    /// Whether any stock is left.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Current price in the store currency.
    #[must_use]
    pub fn display_price(&self) -> Price {
        Price::store(self.price)
    }

    /// Whole-percent markdown from `original_price`, rounded half away from zero.
    ///
    /// `None` when there is no original price or it is not above the current price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original.is_zero() {
            return None;
        }

        ((original - self.price) / original * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    /// Whether `size` is one of the product's sizes (exact match).
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether `color` is one of the product's colors (exact match).
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}
