//! Product detail.

use anyhow::Result;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let product = store.select_product(args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
    } else {
        ctx.output.product(product);
    }
    Ok(())
}
