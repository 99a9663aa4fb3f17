//! The listing controller: owns listing state and the initial product load.

use std::sync::Arc;

use futures::FutureExt;
use shopfront_catalog::catalog::{CategoryLabel, Product};
use shopfront_catalog::search::{PriceRange, SortOption};
use shopfront_catalog::{Currency, ProductId};
use shopfront_data::{ProductSource, SourceError};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use crate::error::ListingError;
use crate::lifecycle::LoadPhase;
use crate::selection::Selections;
use crate::slider::RangeSlider;
use crate::state::{ListingState, ViewMode};
use crate::view::{category_pills, CategoryPill, ListingView, ProductTile, LOADING_PLACEHOLDERS};

type LoadResult = Result<Vec<Product>, SourceError>;

/// Coordinates one mounted product listing.
///
/// The controller is the only owner of its [`ListingState`]. The initial
/// load runs as a spawned task; its handle is held here and aborted when the
/// controller is unmounted or dropped, so a late result can never land in
/// state that no longer exists.
pub struct ListingController {
    source: Arc<dyn ProductSource>,
    state: ListingState,
    phase: LoadPhase,
    pending: Option<JoinHandle<LoadResult>>,
    selections: Selections,
}

impl ListingController {
    /// Mount a listing over `source`. Nothing is fetched until [`initialize`].
    ///
    /// [`initialize`]: ListingController::initialize
    pub fn mount(source: Arc<dyn ProductSource>) -> Self {
        debug!(source = source.name(), "listing mounted");
        Self {
            source,
            state: ListingState::new(),
            phase: LoadPhase::NotStarted,
            pending: None,
            selections: Selections::new(),
        }
    }

    /// Start the one-time product load.
    ///
    /// Must be called from within a tokio runtime. Calling it again after
    /// the load has started is a no-op.
    pub fn initialize(&mut self) {
        if self.phase != LoadPhase::NotStarted {
            debug!(phase = %self.phase, "initialize ignored; load already started");
            return;
        }

        self.state.loading = true;
        self.phase = LoadPhase::Loading;

        let source = Arc::clone(&self.source);
        self.pending = Some(tokio::spawn(async move { source.list_products().await }));
        debug!(source = self.source.name(), "product load started");
    }

    /// Wait for the in-flight load and apply its result.
    ///
    /// Returns immediately when no load is pending. Cancelling this future
    /// leaves the load in flight for a later `settle` or `try_settle`.
    pub async fn settle(&mut self) -> &LoadPhase {
        if let Some(handle) = self.pending.as_mut() {
            let outcome = handle.await;
            self.pending = None;
            self.apply(outcome);
        }
        &self.phase
    }

    /// Apply the load result if it is already available.
    ///
    /// Returns true when this call settled the load.
    pub fn try_settle(&mut self) -> bool {
        let Some(handle) = self.pending.as_mut() else {
            return false;
        };
        if !handle.is_finished() {
            return false;
        }

        // is_finished can run ahead of the output being readable; the
        // handle stays pending in that case.
        let Some(outcome) = handle.now_or_never() else {
            return false;
        };
        self.pending = None;
        self.apply(outcome);
        true
    }

    fn apply(&mut self, outcome: Result<LoadResult, JoinError>) {
        match outcome {
            Ok(Ok(products)) => {
                info!(
                    source = self.source.name(),
                    count = products.len(),
                    "product load settled"
                );
                self.state.products = products;
                self.phase = LoadPhase::Loaded;
            }
            Ok(Err(e)) => {
                warn!(source = self.source.name(), error = %e, "failed to fetch products");
                self.phase = LoadPhase::Failed(e.to_string());
            }
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "product load task did not complete");
                self.phase = LoadPhase::Failed(e.to_string());
            }
        }
        self.state.loading = false;
    }

    /// Tear down the listing, abandoning any in-flight load.
    pub fn unmount(self) {
        debug!(phase = %self.phase, "listing unmounted");
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Read-only view of the whole state, for presentation code.
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    // Filter bar

    /// Replace the active category. Unknown labels simply match nothing.
    pub fn set_active_category(&mut self, category: Option<CategoryLabel>) {
        debug!(category = ?category.as_ref().map(|c| c.as_str()), "active category set");
        self.state.active_category = category;
    }

    /// Replace the search text verbatim.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.state.search_query = text.into();
        debug!(query = %self.state.search_query, "search query set");
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    pub fn toggle_filters_visible(&mut self) {
        self.state.filters_visible = !self.state.filters_visible;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        debug!(sort = sort.as_str(), "sort set");
        self.state.sort = sort;
    }

    // Sidebar refinements

    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.state.refinements.price_range = range;
    }

    /// Take the price range from a slider, in the catalog's currency.
    pub fn apply_price_slider(&mut self, slider: &RangeSlider) {
        let range = slider.as_price_range(self.catalog_currency());
        self.set_price_range(range);
    }

    /// Flip a star rating selection. Returns whether it is now selected.
    pub fn toggle_rating(&mut self, rating: u8) -> Result<bool, ListingError> {
        Ok(self.state.refinements.toggle_rating(rating)?)
    }

    pub fn set_in_stock_only(&mut self, enabled: bool) {
        self.state.refinements.in_stock_only = enabled;
    }

    pub fn set_on_sale_only(&mut self, enabled: bool) {
        self.state.refinements.on_sale_only = enabled;
    }

    /// Clear category, search text, and refinements.
    ///
    /// View mode, sort, and sidebar visibility are left alone.
    pub fn reset_filters(&mut self) {
        self.state.active_category = None;
        self.state.search_query.clear();
        self.state.refinements = Default::default();
        debug!("filters reset");
    }

    // Derived data

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<CategoryLabel> {
        self.state.categories()
    }

    /// Products matching the current filters, in source order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.state.filtered_products()
    }

    /// Filtered products in the selected sort order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.state.visible_products()
    }

    pub fn category_pills(&self) -> Vec<CategoryPill> {
        category_pills(&self.categories(), self.state.active_category.as_ref())
    }

    /// Currency of the loaded catalog, USD before anything loads.
    pub fn catalog_currency(&self) -> Currency {
        self.state
            .products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }

    /// What the product area should show right now.
    pub fn view(&self) -> ListingView {
        if self.state.loading {
            return ListingView::Loading {
                placeholders: LOADING_PLACEHOLDERS,
            };
        }
        if let Some(reason) = self.phase.failure() {
            return ListingView::Unavailable {
                reason: reason.to_string(),
            };
        }

        let items: Vec<ProductTile> = self
            .visible_products()
            .into_iter()
            .map(|p| {
                ProductTile::new(
                    p,
                    self.selections.is_wishlisted(p.id),
                    self.selections.cart_quantity(p.id),
                )
            })
            .collect();

        if items.is_empty() {
            return ListingView::Empty;
        }
        match self.state.view_mode {
            ViewMode::Grid => ListingView::Grid { items },
            ViewMode::List => ListingView::List { items },
        }
    }

    // Per-item affordances

    /// Flip the wishlist mark on a loaded product.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Result<bool, ListingError> {
        self.require_product(id)?;
        Ok(self.selections.toggle_wishlist(id))
    }

    pub fn is_wishlisted(&self, id: ProductId) -> bool {
        self.selections.is_wishlisted(id)
    }

    /// Add one unit of a loaded product to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32, ListingError> {
        self.require_product(id)?;
        let quantity = self.selections.add_to_cart(id);
        debug!(product = %id, quantity, "added to cart");
        Ok(quantity)
    }

    pub fn cart_count(&self) -> u32 {
        self.selections.cart_count()
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    fn require_product(&self, id: ProductId) -> Result<&Product, ListingError> {
        self.state
            .product(id)
            .ok_or(ListingError::UnknownProduct(id))
    }
}

impl Drop for ListingController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for ListingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingController")
            .field("source", &self.source.name())
            .field("phase", &self.phase)
            .field("pending", &self.pending.is_some())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use shopfront_data::{LatencyConfig, MockProductSource};

    fn sample_source() -> Arc<dyn ProductSource> {
        Arc::new(MockProductSource::sample(Currency::USD).with_latency(LatencyConfig::none()))
    }

    async fn loaded_listing() -> ListingController {
        let mut listing = ListingController::mount(sample_source());
        listing.initialize();
        listing.settle().await;
        listing
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    /// Source that records whether its load ran to completion.
    struct TrackingSource {
        calls: AtomicUsize,
        completed: Arc<AtomicBool>,
        delay: Duration,
    }

    #[async_trait]
    impl ProductSource for TrackingSource {
        async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.completed.store(true, Ordering::SeqCst);
            Ok(shopfront_data::sample_products(Currency::USD))
        }

        async fn get_product_by_id(&self, _id: ProductId) -> Result<Option<Product>, SourceError> {
            Ok(None)
        }

        async fn list_products_by_category(
            &self,
            _category: &CategoryLabel,
        ) -> Result<Vec<Product>, SourceError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_mount_starts_loading_with_no_products() {
        let listing = ListingController::mount(sample_source());
        assert_eq!(listing.phase(), &LoadPhase::NotStarted);
        assert!(listing.loading());
        assert!(listing.products().is_empty());
        assert_eq!(
            listing.view(),
            ListingView::Loading {
                placeholders: LOADING_PLACEHOLDERS
            }
        );
    }

    #[tokio::test]
    async fn test_load_preserves_source_order() {
        let listing = loaded_listing().await;
        assert_eq!(listing.phase(), &LoadPhase::Loaded);
        assert!(!listing.loading());
        let all = listing.filtered_products();
        assert_eq!(ids(&all), (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_electronics_category() {
        let mut listing = loaded_listing().await;
        listing.set_active_category(Some(CategoryLabel::new("electronics")));
        assert_eq!(ids(&listing.filtered_products()), vec![1, 3, 5, 8, 11]);
    }

    #[tokio::test]
    async fn test_search_yoga() {
        let mut listing = loaded_listing().await;
        listing.set_search_query("yoga");
        assert_eq!(ids(&listing.filtered_products()), vec![10]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_description() {
        let mut listing = loaded_listing().await;
        listing.set_search_query("NOISE CANCELLATION");
        assert_eq!(ids(&listing.filtered_products()), vec![1]);
    }

    #[tokio::test]
    async fn test_category_and_search_conjunction() {
        let mut listing = loaded_listing().await;
        listing.set_active_category(Some(CategoryLabel::new("kitchen")));
        listing.set_search_query("candle");
        assert!(listing.filtered_products().is_empty());
        assert_eq!(listing.view(), ListingView::Empty);

        listing.set_active_category(Some(CategoryLabel::new("home")));
        assert_eq!(ids(&listing.filtered_products()), vec![12]);
    }

    #[tokio::test]
    async fn test_conjunction_is_intersection_of_single_filters() {
        let mut listing = loaded_listing().await;
        listing.set_search_query("smart");
        let search_only = ids(&listing.filtered_products());

        listing.set_search_query("");
        listing.set_active_category(Some(CategoryLabel::new("electronics")));
        let category_only = ids(&listing.filtered_products());

        listing.set_search_query("smart");
        let both = ids(&listing.filtered_products());

        let expected: Vec<u32> = category_only
            .iter()
            .copied()
            .filter(|id| search_only.contains(id))
            .collect();
        assert_eq!(both, expected);
        assert_eq!(both, vec![3, 8]);
    }

    #[tokio::test]
    async fn test_unknown_category_yields_empty() {
        let mut listing = loaded_listing().await;
        listing.set_active_category(Some(CategoryLabel::new("garden")));
        assert!(listing.filtered_products().is_empty());
    }

    #[tokio::test]
    async fn test_set_active_category_is_idempotent() {
        let mut listing = loaded_listing().await;
        listing.set_active_category(Some(CategoryLabel::new("kitchen")));
        let once = ids(&listing.filtered_products());
        listing.set_active_category(Some(CategoryLabel::new("kitchen")));
        assert_eq!(ids(&listing.filtered_products()), once);
        assert_eq!(once, vec![6, 9]);
    }

    #[tokio::test]
    async fn test_categories_in_first_appearance_order() {
        let listing = loaded_listing().await;
        let names: Vec<String> = listing
            .categories()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["electronics", "furniture", "clothing", "kitchen", "accessories", "fitness", "home"]
        );
        assert_eq!(listing.category_pills().len(), 8);
    }

    #[tokio::test]
    async fn test_load_failure_settles_empty() {
        let source = MockProductSource::sample(Currency::USD)
            .with_latency(LatencyConfig::none())
            .failing("catalog offline");
        let mut listing = ListingController::mount(Arc::new(source));
        listing.initialize();
        assert!(listing.loading());

        let phase = listing.settle().await.clone();
        assert!(matches!(phase, LoadPhase::Failed(ref reason) if reason.contains("catalog offline")));
        assert!(!listing.loading());
        assert!(listing.products().is_empty());

        listing.set_active_category(Some(CategoryLabel::new("electronics")));
        assert!(listing.filtered_products().is_empty());
        listing.set_active_category(None);
        listing.set_search_query("yoga");
        assert!(listing.filtered_products().is_empty());
        assert!(matches!(listing.view(), ListingView::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let source = Arc::new(TrackingSource {
            calls: AtomicUsize::new(0),
            completed: Arc::new(AtomicBool::new(false)),
            delay: Duration::ZERO,
        });
        let mut listing = ListingController::mount(source.clone());
        listing.initialize();
        listing.initialize();
        listing.settle().await;
        listing.initialize();
        listing.settle().await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(listing.phase(), &LoadPhase::Loaded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_discards_in_flight_load() {
        let completed = Arc::new(AtomicBool::new(false));
        let source = Arc::new(TrackingSource {
            calls: AtomicUsize::new(0),
            completed: completed.clone(),
            delay: Duration::from_millis(800),
        });

        let mut listing = ListingController::mount(source.clone());
        listing.initialize();
        tokio::task::yield_now().await;
        listing.unmount();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(!completed.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_settle_waits_for_latency() {
        let source = MockProductSource::sample(Currency::USD);
        let mut listing = ListingController::mount(Arc::new(source));
        listing.initialize();

        assert!(!listing.try_settle());
        assert_eq!(listing.phase(), &LoadPhase::Loading);

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert!(listing.try_settle());
        assert_eq!(listing.phase(), &LoadPhase::Loaded);
        assert_eq!(listing.products().len(), 12);
        assert!(!listing.try_settle());
    }

    fn tracking_source(delay: Duration) -> (Arc<TrackingSource>, Arc<AtomicBool>) {
        let completed = Arc::new(AtomicBool::new(false));
        let source = Arc::new(TrackingSource {
            calls: AtomicUsize::new(0),
            completed: completed.clone(),
            delay,
        });
        (source, completed)
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_settle_keeps_load_pending_until_ready() {
        let (source, completed) = tracking_source(Duration::from_millis(800));
        let mut listing = ListingController::mount(source);
        listing.initialize();
        tokio::task::yield_now().await;

        assert!(!listing.try_settle());
        assert!(!listing.try_settle());
        assert!(listing.loading());

        assert_eq!(listing.settle().await, &LoadPhase::Loaded);
        assert!(completed.load(Ordering::SeqCst));
        assert_eq!(listing.products().len(), 12);
        assert!(!listing.loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_after_try_settle_still_aborts_load() {
        let (source, completed) = tracking_source(Duration::from_millis(800));
        let mut listing = ListingController::mount(source.clone());
        listing.initialize();
        tokio::task::yield_now().await;

        assert!(!listing.try_settle());
        listing.unmount();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(!completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_try_settle_applies_finished_load() {
        let mut listing = ListingController::mount(sample_source());
        listing.initialize();
        for _ in 0..100 {
            if listing.try_settle() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(listing.phase(), &LoadPhase::Loaded);
        assert_eq!(listing.products().len(), 12);
        assert!(!listing.try_settle());
    }

    #[tokio::test]
    async fn test_view_mode_and_filters_visibility() {
        let mut listing = loaded_listing().await;
        assert!(matches!(listing.view(), ListingView::Grid { ref items } if items.len() == 12));

        listing.set_view_mode(ViewMode::List);
        assert!(matches!(listing.view(), ListingView::List { ref items } if items.len() == 12));

        listing.toggle_filters_visible();
        assert!(listing.state().filters_visible);
        listing.toggle_filters_visible();
        assert!(!listing.state().filters_visible);
    }

    #[tokio::test]
    async fn test_sort_reorders_visible_only() {
        let mut listing = loaded_listing().await;
        listing.set_active_category(Some(CategoryLabel::new("electronics")));
        listing.set_sort(SortOption::PriceAsc);

        // effective prices: 11 $89.99, 8 $110.49, 3 $161.99, 1 $212.49, 5 $854.99
        assert_eq!(ids(&listing.visible_products()), vec![11, 8, 3, 1, 5]);
        assert_eq!(ids(&listing.filtered_products()), vec![1, 3, 5, 8, 11]);

        listing.set_sort(SortOption::Popularity);
        assert_eq!(ids(&listing.visible_products()), vec![5, 1, 11, 3, 8]);
    }

    #[tokio::test]
    async fn test_refinements() {
        let mut listing = loaded_listing().await;

        listing.set_in_stock_only(true);
        assert!(!ids(&listing.filtered_products()).contains(&5));
        listing.set_in_stock_only(false);

        listing.set_on_sale_only(true);
        assert_eq!(ids(&listing.filtered_products()), vec![1, 3, 5, 7, 8, 10]);
        listing.set_on_sale_only(false);

        assert_eq!(listing.toggle_rating(5), Ok(true));
        assert!(listing.filtered_products().is_empty());
        listing.toggle_rating(5).unwrap();
        assert!(listing.toggle_rating(9).is_err());

        let mut slider = RangeSlider::price();
        slider.set_value(0, 40);
        listing.apply_price_slider(&slider);
        assert_eq!(ids(&listing.filtered_products()), vec![4, 6, 9, 12]);
    }

    #[tokio::test]
    async fn test_reset_filters_keeps_layout() {
        let mut listing = loaded_listing().await;
        listing.set_active_category(Some(CategoryLabel::new("home")));
        listing.set_search_query("candle");
        listing.set_on_sale_only(true);
        listing.set_view_mode(ViewMode::List);
        listing.set_sort(SortOption::Newest);

        listing.reset_filters();
        assert_eq!(listing.filtered_products().len(), 12);
        assert_eq!(listing.state().view_mode, ViewMode::List);
        assert_eq!(listing.state().sort, SortOption::Newest);
    }

    #[tokio::test]
    async fn test_wishlist_and_cart() {
        let mut listing = loaded_listing().await;
        let mat = ProductId::new(10);

        assert_eq!(listing.toggle_wishlist(mat), Ok(true));
        assert!(listing.is_wishlisted(mat));
        assert_eq!(listing.add_to_cart(mat), Ok(1));
        assert_eq!(listing.add_to_cart(ProductId::new(2)), Ok(1));
        assert_eq!(listing.cart_count(), 2);

        listing.set_search_query("yoga");
        let view = listing.view();
        assert!(view.items()[0].wishlisted);
        assert_eq!(view.items()[0].in_cart, 1);

        assert_eq!(
            listing.add_to_cart(ProductId::new(99)),
            Err(ListingError::UnknownProduct(ProductId::new(99)))
        );
    }

    #[tokio::test]
    async fn test_affordances_rejected_before_load() {
        let mut listing = ListingController::mount(sample_source());
        assert!(listing.toggle_wishlist(ProductId::new(1)).is_err());
        assert_eq!(listing.cart_count(), 0);
    }
}
