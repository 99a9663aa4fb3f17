//! CLI command implementations.

pub mod categories;
pub mod list;
pub mod show;

use clap::Args;
use shopfront_catalog::search::SortOption;
use shopfront_catalog::{Currency, ProductId};
use shopfront_listing::ViewMode;

/// Where products come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Read products from a JSON catalog file.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Simulate a catalog outage (built-in catalog only).
    #[arg(long)]
    pub fail: bool,

    /// Skip the simulated network delay.
    #[arg(long)]
    pub no_delay: bool,

    /// Price the built-in catalog in this currency (USD, EUR, GBP, JPY).
    #[arg(long, value_name = "CODE")]
    pub currency: Option<Currency>,
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (featured, price-asc, price-desc, newest, popularity).
    #[arg(long)]
    pub sort: Option<SortOption>,

    /// Layout (grid or list).
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Lowest price, in whole currency units (0-1000, step 10).
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Highest price, in whole currency units (0-1000, step 10).
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum star rating; repeat to select several.
    #[arg(long = "rating")]
    pub ratings: Vec<u8>,

    /// Hide out-of-stock products.
    #[arg(long)]
    pub in_stock: bool,

    /// Only show discounted products.
    #[arg(long)]
    pub on_sale: bool,

    /// Show the filter sidebar.
    #[arg(long)]
    pub filters: bool,

    /// Mark products as wishlisted.
    #[arg(long = "wishlist", value_name = "ID")]
    pub wishlist: Vec<ProductId>,

    /// Add products to the cart; repeat an id to add more.
    #[arg(long = "add-to-cart", value_name = "ID")]
    pub add_to_cart: Vec<ProductId>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the categories command.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// List the products in this category instead.
    pub name: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl SourceArgs {
    pub fn options(&self) -> crate::context::SourceOptions<'_> {
        crate::context::SourceOptions {
            catalog: self.catalog.as_deref(),
            fail: self.fail,
            instant: self.no_delay,
            currency: self.currency,
        }
    }
}

/// Parse one command's arguments the way the binary would.
#[cfg(test)]
pub(crate) fn parse_args<A: Args + clap::FromArgMatches>(argv: &[&str]) -> A {
    let command = A::augment_args(clap::Command::new("shopfront"));
    let matches = command.try_get_matches_from(argv).unwrap();
    A::from_arg_matches(&matches).unwrap()
}
