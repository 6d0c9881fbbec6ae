//! Wishlist engine.
//!
//! Entries carry their own generated id plus a product snapshot. Set
//! semantics (one entry per product) come from [`Wishlist::toggle`]; the
//! low-level [`Wishlist::add_item`] appends unconditionally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{ProductId, WishlistEntryId};

/// A saved product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub product: Product,
    pub created_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Create an entry with a freshly generated id.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            id: WishlistEntryId::generate(),
            product,
            created_at: Utc::now(),
        }
    }

    /// Id of the product this entry points at.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product.id
    }
}

/// The wishlist state engine.
///
/// Serializes as `{"items": [...]}`, the snapshot persisted per device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(default)]
    items: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistEntry] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an entry. Does not deduplicate.
    pub fn add_item(&mut self, entry: WishlistEntry) {
        self.items.push(entry);
    }

    /// Remove the entry with the given entry id.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_item(&mut self, entry_id: WishlistEntryId) -> bool {
        let before = self.items.len();
        self.items.retain(|entry| entry.id != entry_id);
        self.items.len() != before
    }

    /// Remove every entry for `product_id`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_product(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|entry| entry.product_id() != product_id);
        self.items.len() != before
    }

    /// Add the entry if its product is absent, otherwise remove the existing
    /// entry for that product.
    ///
    /// The existing entry is removed by its own id, never by the id of the
    /// entry passed in. Returns `true` if the product is in the wishlist
    /// afterwards.
    pub fn toggle(&mut self, entry: WishlistEntry) -> bool {
        let existing = self
            .items
            .iter()
            .find(|e| e.product_id() == entry.product_id())
            .map(|e| e.id);

        match existing {
            Some(existing_id) => {
                self.remove_item(existing_id);
                false
            }
            None => {
                self.add_item(entry);
                true
            }
        }
    }

    /// Whether any entry points at `product_id`.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|entry| entry.product_id() == product_id)
    }
}
