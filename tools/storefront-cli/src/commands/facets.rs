//! Category and brand facets with product counts.

use anyhow::Result;
use storefront_commerce::search::facet_counts;

use super::{fetch_catalog, FacetsArgs};
use crate::context::Context;

/// Run the facets command.
pub async fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let catalog = fetch_catalog(ctx).await?;
    let spec = args.to_spec();
    let facets = facet_counts(catalog.products(), &spec);

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    for facet in &facets {
        ctx.output.header(&facet.name);
        if facet.values.is_empty() {
            ctx.output.info("none");
            continue;
        }
        for value in &facet.values {
            let marker = if value.selected { "[x]" } else { "[ ]" };
            ctx.output
                .list_item(&format!("{} {} ({})", marker, value.value, value.count));
        }
    }

    Ok(())
}
