//! Product catalog.
//!
//! [`Catalog`] owns an immutable product list (the built-in seed by default)
//! and answers listing, lookup, and category queries over it.

mod query;
pub mod seed;

use serde::Serialize;
use thiserror::Error;

pub use query::{DEFAULT_LIMIT, Page, ProductQuery, SortBy};

use crate::product::Product;
use crate::types::ProductId;

/// Errors from catalog queries.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("limit must be at least 1")]
    InvalidLimit,
}

/// A category with its product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub product_count: usize,
}

/// Read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog backed by the built-in product list.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(seed::products())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Filter, sort, and paginate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidLimit` if `query.limit` is zero.
    pub fn query(&self, query: &ProductQuery) -> Result<Page<Product>, CatalogError> {
        query.apply(&self.products)
    }

    /// Distinct categories in first-seen order, with product counts.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        for product in &self.products {
            match summaries.iter_mut().find(|c| c.name == product.category) {
                Some(summary) => summary.product_count += 1,
                None => summaries.push(CategorySummary {
                    name: product.category.clone(),
                    slug: slugify(&product.category),
                    product_count: 1,
                }),
            }
        }
        summaries
    }
}

/// Lowercase `name` and join its alphanumeric runs with `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
