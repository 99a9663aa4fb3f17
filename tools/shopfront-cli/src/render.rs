//! Terminal rendering of listing snapshots.

use console::style;
use serde::Serialize;
use shopfront_catalog::catalog::Product;
use shopfront_listing::{CategoryPill, ListingController, ListingView, ProductTile};

use crate::output::{stars, stock_badge, truncate, Output};

/// Everything `list --json` prints.
#[derive(Serialize)]
pub struct ListingReport {
    pub phase: String,
    pub view_mode: String,
    pub sort: String,
    pub category: Option<String>,
    pub search: String,
    pub categories: Vec<CategoryPill>,
    pub cart_count: u32,
    pub listing: ListingView,
}

impl ListingReport {
    pub fn new(controller: &ListingController) -> Self {
        let state = controller.state();
        Self {
            phase: controller.phase().as_str().to_string(),
            view_mode: state.view_mode.to_string(),
            sort: state.sort.as_str().to_string(),
            category: state.active_category.as_ref().map(|c| c.to_string()),
            search: state.search_query.clone(),
            categories: controller.category_pills(),
            cart_count: controller.cart_count(),
            listing: controller.view(),
        }
    }
}

/// Pills as one line, the active one highlighted.
pub fn pills_line(pills: &[CategoryPill]) -> String {
    pills
        .iter()
        .map(|pill| {
            if pill.active {
                style(format!("[{}]", pill.text)).cyan().bold().to_string()
            } else {
                format!(" {} ", pill.text)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole listing page.
pub fn listing(output: &Output, controller: &ListingController) {
    if output.is_json() {
        output.json(&ListingReport::new(controller));
        return;
    }

    let state = controller.state();
    output.header("Products");
    output.line(&pills_line(&controller.category_pills()));

    if !state.search_query.is_empty() {
        output.kv("Search", &state.search_query);
    }
    output.kv("Sort", state.sort.display_name());
    if controller.cart_count() > 0 {
        output.kv("Cart", &controller.cart_count().to_string());
    }

    if state.filters_visible {
        sidebar(output, controller);
    }

    output.line("");
    match controller.view() {
        ListingView::Loading { placeholders } => {
            for _ in 0..placeholders {
                output.line(&style("  ░░░░░░░░░░░░░░░░░░░░").dim().to_string());
            }
        }
        ListingView::Unavailable { reason } => {
            output.error(&format!("Products are unavailable: {}", reason));
        }
        ListingView::Empty => {
            output.line(&style("  No products found").bold().to_string());
            output.line(&style("  Try adjusting your search or filter criteria").dim().to_string());
        }
        ListingView::Grid { items } => grid(output, &items),
        ListingView::List { items } => list(output, &items),
    }
}

fn sidebar(output: &Output, controller: &ListingController) {
    let refinements = &controller.state().refinements;

    output.header("Filters");
    let price = match refinements.price_range {
        Some(range) => {
            let min = range.min.map(|m| m.display()).unwrap_or_else(|| "any".to_string());
            let max = range.max.map(|m| m.display()).unwrap_or_else(|| "any".to_string());
            format!("{} to {}", min, max)
        }
        None => "any".to_string(),
    };
    output.kv("Price", &price);

    let ratings = if refinements.ratings.is_empty() {
        "any".to_string()
    } else {
        refinements
            .ratings
            .iter()
            .map(|r| format!("{} & up", stars(*r)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    output.kv("Rating", &ratings);
    output.kv("In stock only", yes_no(refinements.in_stock_only));
    output.kv("On sale only", yes_no(refinements.on_sale_only));
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn marks(tile: &ProductTile) -> String {
    let mut marks = String::new();
    if tile.wishlisted {
        marks.push('♥');
    }
    if tile.in_cart > 0 {
        marks.push_str(&format!(" 🛒{}", tile.in_cart));
    }
    marks
}

fn price_cell(tile: &ProductTile) -> String {
    let deal = deal_column(tile);
    let price = style(&tile.price).bold().to_string();
    if deal.is_empty() {
        price
    } else {
        format!("{} {}", price, deal)
    }
}

const PRICE_WIDTH: usize = 10;

/// Effective price padded to its column, then styled.
fn price_column(tile: &ProductTile) -> String {
    style(format!("{:<width$}", tile.price, width = PRICE_WIDTH))
        .bold()
        .to_string()
}

/// Struck list price and discount badge, empty when not on sale.
fn deal_column(tile: &ProductTile) -> String {
    match (&tile.list_price, &tile.badge) {
        (Some(list), Some(badge)) => format!(
            "{} {}",
            style(list).dim().strikethrough(),
            style(badge).red()
        ),
        _ => String::new(),
    }
}

fn grid(output: &Output, items: &[ProductTile]) {
    let name_width = if output.term_width() >= 100 { 30 } else { 22 };
    output.table_row(
        &["ID", "Name", "Category", "Rating", "Price"],
        &[4, name_width, 12, 6, PRICE_WIDTH],
    );
    for tile in items {
        let id = tile.id.to_string();
        let name = truncate(&tile.name, name_width);
        let rating = format!("{:.1}", tile.rating);
        // styled cells are padded already; width 0 leaves them untouched
        let price = price_column(tile);
        let extra = format!("{} {}", deal_column(tile), marks(tile));
        output.table_row(
            &[&id, &name, &tile.category, &rating, &price, extra.trim()],
            &[4, name_width, 12, 6, 0, 0],
        );
    }
}

fn list(output: &Output, items: &[ProductTile]) {
    let width = output.term_width().saturating_sub(6).max(40);
    for tile in items {
        output.line(&format!(
            "  {} {}  {}",
            style(format!("#{}", tile.id)).dim(),
            style(&tile.name).bold(),
            marks(tile)
        ));
        output.line(&format!("    {}", truncate(&tile.description, width)));
        output.line(&format!(
            "    {}  {} {:.1}  {}  {}",
            tile.category,
            stars(tile.stars),
            tile.rating,
            price_cell(tile),
            stock_badge(tile.in_stock)
        ));
        output.line("");
    }
}

/// Render one product in detail.
pub fn product(output: &Output, product: &Product) {
    if output.is_json() {
        output.json(product);
        return;
    }

    output.header(&product.name);
    output.kv("ID", &product.id.to_string());
    output.kv("Category", &product.category.display_name());
    output.kv("Price", &product.effective_price().display());
    if product.is_on_sale() {
        output.kv(
            "List price",
            &format!("{} ({}% off)", product.price.display(), product.discount),
        );
        output.kv("You save", &product.discount_amount().display());
    }
    output.kv(
        "Rating",
        &format!("{} {:.1}", stars(product.full_stars()), product.rating),
    );
    output.kv("Availability", &stock_badge(product.in_stock));
    if !product.image.is_empty() {
        output.kv("Image", &product.image);
    }
    if !product.description.is_empty() {
        output.line("");
        output.line(&format!("  {}", product.description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::catalog::CategoryLabel;
    use shopfront_catalog::{Currency, Money};

    fn tile(discount: u8) -> ProductTile {
        let product = Product::new(
            shopfront_catalog::ProductId::new(7),
            "Leather Messenger Bag",
            Money::from_decimal(149.99, Currency::USD),
            "accessories",
        )
        .with_discount(discount);
        ProductTile::new(&product, false, 0)
    }

    #[test]
    fn test_price_column_padded_to_visible_width() {
        let cell = price_column(&tile(20));
        assert_eq!(console::measure_text_width(&cell), PRICE_WIDTH);
        assert!(console::strip_ansi_codes(&cell).starts_with("$119.99"));
    }

    #[test]
    fn test_deal_column() {
        let deal = console::strip_ansi_codes(&deal_column(&tile(20))).to_string();
        assert_eq!(deal, "$149.99 20% OFF");
        assert!(deal_column(&tile(0)).is_empty());
    }

    #[test]
    fn test_pills_line_marks_active() {
        console::set_colors_enabled(false);
        let pills = shopfront_listing::category_pills(
            &[CategoryLabel::new("electronics"), CategoryLabel::new("home")],
            None,
        );
        assert_eq!(pills_line(&pills), "[All]  Electronics   Home ");
    }
}
