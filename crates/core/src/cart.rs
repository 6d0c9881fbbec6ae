//! Cart engine.
//!
//! A cart is an ordered list of line items. Each line item is identified by
//! the composite [`LineIdentity`] `(product id, size, color)`; adding an item
//! whose identity already exists merges into the existing line by summing
//! quantities.
//!
//! Quantity updates and the by-product removal address lines by the bare
//! product id (the line item's top-level `id`), so they apply to every size
//! and color variant of that product at once. Use [`Cart::remove_line`] to
//! remove a single variant.
//!
//! Totals are derived on every call, never cached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::ProductId;

/// Composite identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineIdentity {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl LineIdentity {
    /// Build an identity from its parts.
    #[must_use]
    pub const fn new(product_id: ProductId, size: Option<String>, color: Option<String>) -> Self {
        Self {
            product_id,
            size,
            color,
        }
    }
}

/// One cart row: a product/size/color combination and its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Bare product id (not the composite identity).
    pub id: ProductId,
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Create a line item for `product`. A quantity of zero is raised to 1.
    #[must_use]
    pub fn new(
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: product.id.clone(),
            product,
            quantity: quantity.max(1),
            size,
            color,
            created_at: now,
            updated_at: now,
        }
    }

    /// The composite identity used for merging.
    #[must_use]
    pub fn identity(&self) -> LineIdentity {
        LineIdentity::new(self.id.clone(), self.size.clone(), self.color.clone())
    }

    /// Whether this line has the given composite identity.
    #[must_use]
    pub fn matches(&self, identity: &LineIdentity) -> bool {
        self.id == identity.product_id && self.size == identity.size && self.color == identity.color
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The cart state engine.
///
/// Serializes as `{"items": [...]}`, the snapshot persisted per device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line with the given composite identity.
    #[must_use]
    pub fn find(&self, identity: &LineIdentity) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.matches(identity))
    }

    /// Add an item, merging into an existing line with the same identity.
    ///
    /// Merged quantities saturate at `u32::MAX`. Stock is not checked here.
    pub fn add_item(&mut self, item: CartLineItem) {
        let identity = item.identity();
        if let Some(existing) = self.items.iter_mut().find(|line| line.matches(&identity)) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            existing.updated_at = Utc::now();
        } else {
            self.items.push(item);
        }
    }

    /// Remove every line whose top-level id is `product_id`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != product_id);
        self.items.len() != before
    }

    /// Remove exactly the line with the given composite identity.
    ///
    /// Returns `true` if a line was removed.
    pub fn remove_line(&mut self, identity: &LineIdentity) -> bool {
        let before = self.items.len();
        self.items.retain(|line| !line.matches(identity));
        self.items.len() != before
    }

    /// Set the quantity of every line whose top-level id is `product_id`.
    ///
    /// Values below 1 are raised to 1; a line is never removed this way.
    /// Returns `true` if any line matched.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        let now = Utc::now();
        let mut matched = false;
        for line in self.items.iter_mut().filter(|line| &line.id == product_id) {
            line.quantity = quantity;
            line.updated_at = now;
            matched = true;
        }
        matched
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
