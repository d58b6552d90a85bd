//! One-shot filtered product listing.

use anyhow::Result;
use console::style;
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::search::{filter_products, FilterSpec};

use super::{fetch_catalog, ProductsArgs};
use crate::context::Context;
use crate::output::{filter_summary, product_line};

#[derive(Serialize)]
struct ProductListing<'a> {
    filters: &'a FilterSpec,
    total: usize,
    count: usize,
    products: &'a [Product],
}

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = fetch_catalog(ctx).await?;
    let spec = args.filters.to_spec();
    let matching = filter_products(catalog.products(), &spec);

    ctx.logger_for("filter")
        .debug_builder("Filtered catalog")
        .field("filters", filter_summary(&spec))
        .field_u64("matching", matching.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&ProductListing {
            filters: &spec,
            total: catalog.len(),
            count: matching.len(),
            products: &matching,
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products ({})",
        matching.len(),
        catalog.len(),
        filter_summary(&spec)
    ));

    if matching.is_empty() {
        ctx.output.info("No products found. Try adjusting your filters.");
        return Ok(());
    }

    for product in &matching {
        ctx.output
            .line(&format!("  {}", product_line(product, 0)));
        if ctx.output.is_verbose() && !product.brand.is_empty() {
            ctx.output
                .line(&format!("        {}", style(&product.brand).dim()));
        }
    }

    Ok(())
}
