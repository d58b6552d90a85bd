//! CLI command implementations.

pub mod config;
pub mod facets;
pub mod products;
pub mod shop;

use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_commerce::catalog::{Catalog, CatalogStatus};
use storefront_commerce::search::{FilterSpec, PriceRange, StockStatus};
use storefront_data::{load_catalog, CatalogClient};

use crate::context::Context;

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Skip the simulated payment delay.
    #[arg(long)]
    pub no_delay: bool,
}

/// Filter flags shared by the listing commands.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Category label or slug (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Exact brand name (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Lowest price, inclusive.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price, inclusive.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating (e.g. 4 for "4 & up").
    #[arg(long)]
    pub rating: Option<f64>,

    /// Availability: any, in-stock or out-of-stock.
    #[arg(long, value_parser = parse_stock_status, default_value = "any")]
    pub stock: StockStatus,
}

impl FilterArgs {
    /// Build the filter spec these flags describe.
    pub fn to_spec(&self) -> FilterSpec {
        let mut range = PriceRange::unbounded();
        if let Some(min) = self.min_price {
            range = range.with_min(min);
        }
        if let Some(max) = self.max_price {
            range = range.with_max(max);
        }

        let mut spec = FilterSpec::new()
            .with_price_range(range.min, range.max)
            .with_min_rating(self.rating.unwrap_or(0.0))
            .with_stock_status(self.stock);
        for category in &self.categories {
            spec = spec.with_category(category.clone());
        }
        for brand in &self.brands {
            spec = spec.with_brand(brand.clone());
        }
        spec
    }
}

fn parse_stock_status(s: &str) -> Result<StockStatus, String> {
    StockStatus::from_str(s)
        .ok_or_else(|| format!("expected any, in-stock or out-of-stock, got '{}'", s))
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the facets command. Counts ignore price, rating and
/// availability, so only the selections that mark facet values are taken.
#[derive(Args, Default)]
pub struct FacetsArgs {
    /// Category label or slug to mark as selected (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Brand name to mark as selected (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,
}

impl FacetsArgs {
    /// Build a filter spec carrying only the selections.
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        for category in &self.categories {
            spec = spec.with_category(category.clone());
        }
        for brand in &self.brands {
            spec = spec.with_brand(brand.clone());
        }
        spec
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Fetch the catalog once, with a spinner while the request is outstanding.
///
/// A failed fetch is logged and reported as a warning; the returned catalog
/// is then empty.
pub async fn fetch_catalog(ctx: &Context) -> Result<Catalog> {
    let client = CatalogClient::builder()
        .base_url(ctx.config.catalog.base_url.clone())
        .limit(ctx.config.catalog.limit)
        .timeout(ctx.config.catalog.timeout())
        .build()?;
    ctx.output.debug(&format!("GET {}", client.products_url()));

    let mut catalog = Catalog::new();
    let spinner = ctx.output.spinner("Loading products...");
    let load = load_catalog(&client, &mut catalog, &ctx.logger_for("catalog")).await;
    spinner.finish_and_clear();

    if let CatalogStatus::Failed(reason) = catalog.status() {
        ctx.output
            .warn(&format!("Could not load products: {}", reason));
    } else if load.is_partial() {
        ctx.output.warn(&format!(
            "Showing the first {} of {} products",
            load.loaded, load.available
        ));
    }

    Ok(catalog)
}
