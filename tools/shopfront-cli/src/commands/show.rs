//! Show a single product.

use anyhow::{Context as _, Result};

use super::ShowArgs;
use crate::context::Context;
use crate::render;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let source = ctx.product_source(args.source.options());

    let spinner = ctx.output.spinner("Loading product...");
    let product = source.get_product_by_id(args.id).await;
    spinner.finish_and_clear();

    let product = product?.with_context(|| format!("No product with id {}", args.id))?;
    render::product(&ctx.output, &product);
    Ok(())
}
