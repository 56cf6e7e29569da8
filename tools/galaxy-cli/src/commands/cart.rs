//! Scripted cart session.

use anyhow::Result;
use serde_json::json;

use super::CartArgs;
use crate::context::Context;

/// Run the cart command.
///
/// Adds are applied first, then quantity changes, then removals.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    for id in &args.add {
        let quantity = store.add_to_cart(*id)?;
        ctx.output.debug(&format!("added {} (quantity {})", id, quantity));
    }
    for (id, quantity) in &args.set {
        if !store.update_quantity(*id, *quantity) {
            ctx.output.warn(&format!("Product {} is not in the cart", id));
        }
    }
    for id in &args.remove {
        if !store.remove_from_cart(*id) {
            ctx.output.warn(&format!("Product {} is not in the cart", id));
        }
    }

    let summary = store.cart_summary();
    let receipt = if args.checkout { store.checkout() } else { None };

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cart": summary, "receipt": receipt }));
        return Ok(());
    }

    ctx.output.cart(&summary);
    match receipt {
        Some(receipt) => ctx.output.receipt(&receipt),
        None if args.checkout => ctx.output.warn("Nothing to check out."),
        None => {}
    }
    Ok(())
}
