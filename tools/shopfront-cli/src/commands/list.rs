//! Show the product listing.

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use shopfront_catalog::catalog::CategoryLabel;
use shopfront_listing::{ListingController, RangeSlider};
use tracing::debug;

use super::ListArgs;
use crate::context::Context;
use crate::render;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let source = ctx.product_source(args.source.options());
    let defaults = &ctx.config.storefront;

    let mut controller = ListingController::mount(source);
    controller.set_view_mode(args.view.unwrap_or(defaults.view));
    controller.set_sort(args.sort.unwrap_or(defaults.sort));
    if args.filters {
        controller.toggle_filters_visible();
    }

    controller.initialize();
    let spinner = ctx.output.spinner("Loading products...");
    controller.settle().await;
    spinner.finish_and_clear();

    if let Some(category) = args.category {
        controller.set_active_category(Some(CategoryLabel::new(category)));
    }
    if let Some(search) = args.search {
        controller.set_search_query(search);
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let mut slider = RangeSlider::price();
        let (lo, hi) = slider.bounds();
        let requested = (args.min_price.unwrap_or(lo), args.max_price.unwrap_or(hi));
        slider.set_value(requested.0, requested.1);
        if slider.value() != requested {
            let (low, high) = slider.value();
            ctx.output
                .warn(&format!("Price range adjusted to {} - {}", low, high));
        }
        controller.apply_price_slider(&slider);
    }

    let ratings: BTreeSet<u8> = args.ratings.into_iter().collect();
    for rating in ratings {
        controller.toggle_rating(rating)?;
    }
    controller.set_in_stock_only(args.in_stock);
    controller.set_on_sale_only(args.on_sale);

    if let Some(reason) = controller.phase().failure() {
        let reason = reason.to_string();
        render::listing(&ctx.output, &controller);
        bail!("Product load failed: {}", reason);
    }

    for id in args.wishlist {
        controller.toggle_wishlist(id)?;
    }
    for id in args.add_to_cart {
        let quantity = controller.add_to_cart(id)?;
        ctx.output
            .success(&format!("Added product {} to cart ({} in cart)", id, quantity));
    }

    render::listing(&ctx.output, &controller);

    let shown = controller.visible_products().len();
    let total = controller.products().len();
    debug!(shown, total, "listing rendered");
    ctx.output.info(&format!("{} of {} products shown", shown, total));

    controller.unmount();
    Ok(())
}
