//! Cotton Row CLI - Catalog inspection and export tools.
//!
//! # Usage
//!
//! ```bash
//! # List products with the same filters the storefront API accepts
//! cr-cli catalog list --category Pants --sort-by price-low --limit 5
//!
//! # Show one product
//! cr-cli catalog show 9
//!
//! # Categories with product counts
//! cr-cli catalog categories
//!
//! # Dump the catalog as JSON
//! cr-cli catalog export --pretty --output catalog.json
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "cr-cli")]
#[command(author, version, about = "Cotton Row CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the built-in product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products (filtered, sorted, paginated)
    List {
        /// Exact category name (e.g. "T-Shirts")
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive match on name or description
        #[arg(short, long)]
        search: Option<String>,

        /// Only new or on-sale products
        #[arg(long)]
        featured: bool,

        /// Minimum price, inclusive
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<Decimal>,

        /// `price-low`, `price-high`, `rating`, `popular`, or `newest`
        #[arg(long, default_value = "newest")]
        sort_by: String,

        /// Page size
        #[arg(short, long, default_value_t = cotton_row_core::catalog::DEFAULT_LIMIT)]
        limit: usize,

        /// Products to skip
        #[arg(long, default_value_t = 0)]
        skip: usize,
    },
    /// Show a single product
    Show {
        /// Product id
        id: String,
    },
    /// List categories with product counts
    Categories,
    /// Write the catalog as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so exported JSON can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                search,
                featured,
                min_price,
                max_price,
                sort_by,
                limit,
                skip,
            } => {
                let query = cotton_row_core::ProductQuery {
                    limit,
                    skip,
                    category,
                    search,
                    featured,
                    min_price,
                    max_price,
                    sort_by: cotton_row_core::SortBy::parse(&sort_by),
                };
                commands::catalog::list(&query)?;
            }
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
            CatalogAction::Categories => commands::catalog::categories(),
            CatalogAction::Export { pretty, output } => {
                commands::catalog::export(pretty, output.as_deref()).await?;
            }
        },
    }
    Ok(())
}
