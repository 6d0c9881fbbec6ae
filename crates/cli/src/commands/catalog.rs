//! Catalog inspection and export.
//!
//! Every command reads the same built-in catalog the storefront serves, so
//! listings here match `GET /api/products` for the same filters.

use std::io::Write;
use std::path::Path;

use tracing::info;

use cotton_row_core::{Catalog, Product, ProductId, ProductQuery};

/// List products matching `query`.
///
/// # Errors
///
/// Returns an error if the query's limit is zero.
pub fn list(query: &ProductQuery) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seed();
    let page = catalog.query(query)?;

    info!(
        "{} of {} products (sort: {}, skip: {}, pages: {})",
        page.items.len(),
        page.total,
        query.sort_by,
        page.skip,
        page.pages
    );
    for product in &page.items {
        info!("  {}", summary_line(product));
    }

    Ok(())
}

/// Show a single product.
///
/// # Errors
///
/// Returns an error if no product has the given id.
pub fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seed();
    let product = catalog
        .get(&ProductId::new(id))
        .ok_or_else(|| format!("Product not found: {id}"))?;

    for line in detail_lines(product) {
        info!("{line}");
    }

    Ok(())
}

/// List categories with product counts.
pub fn categories() {
    let catalog = Catalog::seed();
    for category in catalog.categories() {
        info!(
            "{} ({}): {} products",
            category.name, category.slug, category.product_count
        );
    }
}

/// Write the full catalog as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn export(pretty: bool, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seed();
    let json = if pretty {
        serde_json::to_string_pretty(catalog.products())?
    } else {
        serde_json::to_string(catalog.products())?
    };

    match output {
        Some(path) => {
            tokio::fs::write(path, format!("{json}\n")).await?;
            info!(path = %path.display(), products = catalog.len(), "Catalog exported");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

/// One-line listing entry: id, name, price, category, and badges.
fn summary_line(product: &Product) -> String {
    let mut line = format!(
        "[{}] {} - {} ({})",
        product.id,
        product.name,
        product.display_price(),
        product.category
    );
    if product.is_new {
        line.push_str(" NEW");
    }
    if let Some(percent) = product.discount_percent() {
        line.push_str(&format!(" -{percent}%"));
    }
    if !product.in_stock() {
        line.push_str(" SOLD OUT");
    }
    line
}

fn detail_lines(product: &Product) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", product.name, product.id),
        format!("  Price:    {}", product.display_price()),
        format!("  Category: {}", product.category),
        format!("  Rating:   {:.1}", product.rating),
        format!("  Stock:    {}", product.stock),
    ];
    if let Some(description) = &product.description {
        lines.push(format!("  {description}"));
    }
    if !product.sizes.is_empty() {
        lines.push(format!("  Sizes:    {}", product.sizes.join(", ")));
    }
    if !product.colors.is_empty() {
        lines.push(format!("  Colors:   {}", product.colors.join(", ")));
    }
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let catalog = Catalog::seed();
        let tee = catalog.get(&ProductId::new("1")).unwrap();
        let line = summary_line(tee);
        assert!(line.starts_with("[1] Classic Cropped Tee - ₱399.00 (T-Shirts)"));
    }

    #[test]
    fn test_detail_lists_variants() {
        let catalog = Catalog::seed();
        let jeans = catalog.get(&ProductId::new("9")).unwrap();
        let lines = detail_lines(jeans);
        assert_eq!(lines[0], "Slim Fit Denim Jeans [9]");
        assert!(lines.iter().any(|l| l.starts_with("  Sizes:    28, 30")));
    }

    #[test]
    fn test_show_unknown_product_fails() {
        assert!(show("999").is_err());
    }

    #[test]
    fn test_list_rejects_zero_limit() {
        let query = ProductQuery {
            limit: 0,
            ..ProductQuery::default()
        };
        assert!(list(&query).is_err());
        assert!(list(&ProductQuery::default()).is_ok());
    }

    #[tokio::test]
    async fn test_export_to_file() {
        let path = std::env::temp_dir().join(format!("cr-cli-export-{}.json", std::process::id()));
        export(false, Some(&path)).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        let products: Vec<Product> = serde_json::from_str(&written).unwrap();
        assert_eq!(products.len(), 16);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
