//! Product listing.

use anyhow::Result;

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.set_criteria(args.criteria());

    let listing = store.listing();
    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} - {} of {} products",
        ctx.config.store.name,
        listing.len(),
        store.catalog().len()
    ));
    ctx.output.debug(&format!(
        "category={} brand={} price={} sort={} search={:?}",
        store.criteria().category_value(),
        store.criteria().brand_value(),
        store.criteria().price,
        store.criteria().sort,
        store.search()
    ));
    ctx.output.listing(&listing);
    Ok(())
}
