//! Product and category route handlers.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use cotton_row_core::{CategorySummary, Product, ProductId, ProductQuery, SortBy, catalog};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Deserialize empty strings as None for optional parsed fields.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Product listing query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub skip: Option<usize>,
    pub category: Option<String>,
    pub search: Option<String>,
    /// Only the literal `true` enables the filter.
    pub featured: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<Decimal>,
    pub sort_by: Option<String>,
}

impl From<ListProductsQuery> for ProductQuery {
    fn from(query: ListProductsQuery) -> Self {
        Self {
            limit: query.limit.unwrap_or(catalog::DEFAULT_LIMIT),
            skip: query.skip.unwrap_or(0),
            category: query.category.filter(|c| !c.is_empty()),
            search: query.search.filter(|s| !s.is_empty()),
            featured: query.featured.as_deref() == Some("true"),
            min_price: query.min_price,
            max_price: query.max_price,
            sort_by: query.sort_by.as_deref().map(SortBy::parse).unwrap_or_default(),
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<Product>,
    pub total: usize,
    pub limit: usize,
    pub skip: usize,
    pub pages: usize,
}

/// Product detail response.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

/// Category listing response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategorySummary>,
}

/// List products with filtering, sorting, and pagination.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>> {
    let Query(query) = query?;
    let page = state.catalog().query(&query.into())?;

    tracing::debug!(total = page.total, "Listed products");

    Ok(Json(ProductListResponse {
        success: true,
        products: page.items,
        total: page.total,
        limit: page.limit,
        skip: page.skip,
        pages: page.pages,
    }))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = state
        .catalog()
        .get(&ProductId::new(id))
        .cloned()
        .ok_or_else(AppError::product_not_found)?;

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// List categories with product counts.
pub async fn categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        success: true,
        categories: state.catalog().categories(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(qs: &str) -> ProductQuery {
        let uri: axum::http::Uri = format!("/api/products?{qs}").parse().unwrap();
        Query::<ListProductsQuery>::try_from_uri(&uri).unwrap().0.into()
    }

    #[test]
    fn test_defaults() {
        let query = parse("");
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query = parse("limit=&skip=&minPrice=&maxPrice=&category=&search=");
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn test_full_query() {
        let query = parse(
            "limit=4&skip=8&category=Pants&search=jeans&featured=true\
             &minPrice=500&maxPrice=1200.50&sortBy=price-high",
        );
        assert_eq!(query.limit, 4);
        assert_eq!(query.skip, 8);
        assert_eq!(query.category.as_deref(), Some("Pants"));
        assert_eq!(query.search.as_deref(), Some("jeans"));
        assert!(query.featured);
        assert_eq!(query.min_price, Some(Decimal::new(500, 0)));
        assert_eq!(query.max_price, Some(Decimal::new(120_050, 2)));
        assert_eq!(query.sort_by, SortBy::PriceHigh);
    }

    #[test]
    fn test_featured_requires_literal_true() {
        assert!(!parse("featured=1").featured);
        assert!(!parse("featured=false").featured);
    }

    #[test]
    fn test_non_numeric_limit_rejected() {
        let uri: axum::http::Uri = "/api/products?limit=ten".parse().unwrap();
        assert!(Query::<ListProductsQuery>::try_from_uri(&uri).is_err());
    }
}
