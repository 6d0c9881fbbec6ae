//! Filter, sort, and paginate over a product slice.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::CatalogError;
use crate::product::Product;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 10;

/// Listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Same ordering as [`SortBy::Rating`].
    Popular,
    /// Reverse of catalog order.
    #[default]
    Newest,
}

impl SortBy {
    /// Parse the query-string form. Unknown values fall back to `Newest`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "popular" => Self::Popular,
            _ => Self::Newest,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Popular => "popular",
            Self::Newest => "newest",
        }
    }

    fn sort(self, products: &mut Vec<&Product>) {
        // slice::sort_by is stable, ties keep catalog order
        match self {
            Self::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating | Self::Popular => {
                products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            Self::Newest => products.reverse(),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing parameters.
///
/// Filters run in a fixed order: category, search, featured, price range,
/// then sort, then the `skip`/`limit` window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub limit: usize,
    pub skip: usize,
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring over name or description.
    pub search: Option<String>,
    /// Only new or on-sale products.
    pub featured: bool,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    pub sort_by: SortBy,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
            category: None,
            search: None,
            featured: false,
            min_price: None,
            max_price: None,
            sort_by: SortBy::default(),
        }
    }
}

impl ProductQuery {
    /// Whether `product` passes every filter of this query.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category.as_deref()
            && !product.category.eq_ignore_ascii_case(category)
        {
            return false;
        }

        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_name && !in_description {
                return false;
            }
        }

        if self.featured && !product.is_featured() {
            return false;
        }

        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }

        true
    }

    /// Run the query over `products`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidLimit` if `limit` is zero.
    pub fn apply(&self, products: &[Product]) -> Result<Page<Product>, CatalogError> {
        if self.limit == 0 {
            return Err(CatalogError::InvalidLimit);
        }

        let mut filtered: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        self.sort_by.sort(&mut filtered);

        let total = filtered.len();
        let items = filtered
            .into_iter()
            .skip(self.skip)
            .take(self.limit)
            .cloned()
            .collect();

        Ok(Page {
            items,
            total,
            limit: self.limit,
            skip: self.skip,
            pages: total.div_ceil(self.limit),
        })
    }
}

/// One window of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    pub limit: usize,
    pub skip: usize,
    /// `ceil(total / limit)`.
    pub pages: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;

    fn sample() -> Vec<Product> {
        let mut jeans = product("3", 999);
        jeans.category = "Pants".to_string();
        jeans.name = "Slim Fit Denim Jeans".to_string();
        jeans.rating = 4.7;
        jeans.is_sale = true;

        let mut tee = product("1", 399);
        tee.name = "Classic Cropped Tee".to_string();
        tee.rating = 4.6;
        tee.is_new = true;

        let mut basic = product("2", 599);
        basic.name = "Premium Basic Tee".to_string();
        basic.description = Some("Everyday essentials".to_string());
        basic.rating = 4.9;

        let mut cargo = product("4", 1199);
        cargo.category = "Pants".to_string();
        cargo.name = "Cargo Utility Pants".to_string();
        cargo.rating = 4.6;

        vec![tee, basic, jeans, cargo]
    }

    fn ids(page: &Page<Product>) -> Vec<&str> {
        page.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_parse() {
        assert_eq!(SortBy::parse("price-low"), SortBy::PriceLow);
        assert_eq!(SortBy::parse("price-high"), SortBy::PriceHigh);
        assert_eq!(SortBy::parse("rating"), SortBy::Rating);
        assert_eq!(SortBy::parse("popular"), SortBy::Popular);
        assert_eq!(SortBy::parse("newest"), SortBy::Newest);
        assert_eq!(SortBy::parse("cheapest"), SortBy::Newest);
        assert_eq!(SortBy::PriceHigh.to_string(), "price-high");
    }

    #[test]
    fn test_default_is_newest_first() {
        let page = ProductQuery::default().apply(&sample()).unwrap();
        assert_eq!(ids(&page), vec!["4", "3", "2", "1"]);
        assert_eq!(page.total, 4);
        assert_eq!(page.limit, 10);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let query = ProductQuery {
            category: Some("pants".to_string()),
            sort_by: SortBy::PriceLow,
            ..ProductQuery::default()
        };
        let page = query.apply(&sample()).unwrap();
        assert_eq!(ids(&page), vec!["3", "4"]);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let by_name = ProductQuery {
            search: Some("TEE".to_string()),
            sort_by: SortBy::PriceLow,
            ..ProductQuery::default()
        };
        assert_eq!(ids(&by_name.apply(&sample()).unwrap()), vec!["1", "2"]);

        let by_description = ProductQuery {
            search: Some("essentials".to_string()),
            ..ProductQuery::default()
        };
        assert_eq!(ids(&by_description.apply(&sample()).unwrap()), vec!["2"]);
    }

    #[test]
    fn test_featured_and_price_bounds_are_inclusive() {
        let featured = ProductQuery {
            featured: true,
            sort_by: SortBy::PriceLow,
            ..ProductQuery::default()
        };
        assert_eq!(ids(&featured.apply(&sample()).unwrap()), vec!["1", "3"]);

        let ranged = ProductQuery {
            min_price: Some(Decimal::new(599, 0)),
            max_price: Some(Decimal::new(999, 0)),
            sort_by: SortBy::PriceLow,
            ..ProductQuery::default()
        };
        assert_eq!(ids(&ranged.apply(&sample()).unwrap()), vec!["2", "3"]);
    }

    #[test]
    fn test_rating_sort_is_stable_and_popular_matches() {
        let rating = ProductQuery {
            sort_by: SortBy::Rating,
            ..ProductQuery::default()
        };
        // "1" and "4" tie at 4.6 and keep catalog order
        assert_eq!(ids(&rating.apply(&sample()).unwrap()), vec!["2", "3", "1", "4"]);

        let popular = ProductQuery {
            sort_by: SortBy::Popular,
            ..ProductQuery::default()
        };
        assert_eq!(
            popular.apply(&sample()).unwrap().items,
            rating.apply(&sample()).unwrap().items
        );
    }

    #[test]
    fn test_pagination_window() {
        let query = ProductQuery {
            limit: 3,
            skip: 2,
            sort_by: SortBy::PriceHigh,
            ..ProductQuery::default()
        };
        let page = query.apply(&sample()).unwrap();
        assert_eq!(ids(&page), vec!["2", "1"]);
        assert_eq!(page.total, 4);
        assert_eq!(page.pages, 2);

        let past_end = ProductQuery {
            skip: 50,
            ..ProductQuery::default()
        };
        let page = past_end.apply(&sample()).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let query = ProductQuery {
            limit: 0,
            ..ProductQuery::default()
        };
        assert_eq!(query.apply(&sample()), Err(CatalogError::InvalidLimit));
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let query = ProductQuery {
            search: Some("hoodie".to_string()),
            ..ProductQuery::default()
        };
        let page = query.apply(&sample()).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let query = ProductQuery {
            category: Some("T-Shirts".to_string()),
            featured: false,
            max_price: Some(Decimal::new(600, 0)),
            sort_by: SortBy::PriceLow,
            ..ProductQuery::default()
        };
        let once = query.apply(&sample()).unwrap();
        let twice = query.apply(&once.items).unwrap();
        assert_eq!(once.items, twice.items);
    }
}
