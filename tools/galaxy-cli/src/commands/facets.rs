//! Category and brand facets.

use anyhow::Result;
use serde_json::json;

use crate::context::Context;

/// Run the facets command.
pub fn run(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let categories = store.category_facet();
    let brands = store.brand_facet();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "categories": categories, "brands": brands }));
        return Ok(());
    }

    ctx.output.facet(&categories);
    ctx.output.facet(&brands);
    Ok(())
}
