//! Cotton Row Core - Domain types and state engines.
//!
//! This crate provides the types and pure engines shared by all Cotton Row
//! components:
//! - `storefront` - Public-facing JSON API
//! - `cli` - Command-line tools for inspecting and exporting the catalog
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory engines - no I/O, no
//! session storage, no HTTP. Engines are plain owned values: the caller loads
//! a snapshot, mutates it, and decides when to persist it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, and roles
//! - [`product`] - Read-only catalog product record
//! - [`cart`] - Cart engine with merge-on-identity line items
//! - [`wishlist`] - Wishlist engine with toggle semantics
//! - [`catalog`] - Built-in catalog with filter, sort, and paginate
//! - [`theme`] - Persisted light/dark preference

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod product;
pub mod theme;
pub mod types;
pub mod wishlist;

pub use cart::{Cart, CartLineItem, LineIdentity};
pub use catalog::{Catalog, CatalogError, CategorySummary, Page, ProductQuery, SortBy};
pub use product::Product;
pub use theme::ThemePreference;
pub use types::*;
pub use wishlist::{Wishlist, WishlistEntry};
