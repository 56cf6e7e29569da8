//! The storefront session.

use galaxy_auth::{
    AuthError, AuthMode, IdentityProvider, LoginForm, MockIdentityProvider, SessionIdentity,
    SignupForm,
};
use galaxy_commerce::prelude::*;
use galaxy_commerce::search::{brand_facet, category_facet, matches_search};

use crate::{Panels, Receipt, Snapshot, StoreConfig, StorefrontError, View};

/// One shopper's browsing session.
///
/// The single writer for the catalog, the cart, the identity and all view
/// state. Every mutator either completes or returns an error having changed
/// nothing except the inline form error it reports.
#[derive(Debug, Clone)]
pub struct Storefront<P = MockIdentityProvider> {
    config: StoreConfig,
    provider: P,
    catalog: Catalog,
    cart: Cart,
    view: View,
    panels: Panels,
    identity: Option<SessionIdentity>,
    search: String,
    criteria: FilterCriteria,
    auth_mode: AuthMode,
    auth_error: Option<AuthError>,
    product_error: Option<CommerceError>,
}

impl Storefront<MockIdentityProvider> {
    /// Start a session over `catalog` with the mock identity provider.
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self::with_provider(config, catalog, MockIdentityProvider)
    }
}

impl<P: IdentityProvider> Storefront<P> {
    /// Start a session with a specific identity provider.
    pub fn with_provider(config: StoreConfig, catalog: Catalog, provider: P) -> Self {
        let cart = Cart::new(catalog.currency());
        tracing::debug!(store = %config.name, products = catalog.len(), "storefront session started");
        Self {
            config,
            provider,
            catalog,
            cart,
            view: View::Listing,
            panels: Panels::default(),
            identity: None,
            search: String::new(),
            criteria: FilterCriteria::new(),
            auth_mode: AuthMode::default(),
            auth_error: None,
            product_error: None,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    // ---- Listing ----

    /// Header search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Listing filters and sort (the search term lives in [`Storefront::search`]).
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The effective criteria: listing filters plus the header search term.
    fn effective_criteria(&self) -> FilterCriteria {
        self.criteria.clone().with_search(self.search.clone())
    }

    /// The filtered, sorted product listing.
    pub fn listing(&self) -> Vec<&Product> {
        search::apply(self.catalog.list(), &self.effective_criteria())
    }

    /// Categories over the whole catalog.
    pub fn category_facet(&self) -> Facet {
        category_facet(self.catalog.list(), self.criteria.category_value())
    }

    /// Brands over the products matching the header search.
    pub fn brand_facet(&self) -> Facet {
        let searched = self
            .catalog
            .list()
            .iter()
            .filter(|p| matches_search(&p.name, &self.search));
        brand_facet(searched, self.criteria.brand_value())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        tracing::debug!(search = %self.search, "search term set");
    }

    /// Select a category; [`ALL`] clears the filter.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_category(category);
        tracing::debug!(category = %self.criteria.category_value(), "category filter set");
    }

    /// Select a brand; [`ALL`] clears the filter.
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_brand(brand);
        tracing::debug!(brand = %self.criteria.brand_value(), "brand filter set");
    }

    pub fn set_price(&mut self, price: PriceBracket) {
        self.criteria.price = price;
        tracing::debug!(%price, "price filter set");
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
        tracing::debug!(%sort, "sort order set");
    }

    /// Replace the listing filters and sort wholesale.
    ///
    /// A search term inside `criteria` becomes the header search term.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.search = criteria.search.clone();
        self.criteria = criteria.with_search(String::new());
    }

    /// Clear every filter and the search term, keeping the sort order.
    pub fn reset_filters(&mut self) {
        let sort = self.criteria.sort;
        self.criteria = FilterCriteria::new().with_sort(sort);
        self.search.clear();
    }

    // ---- Primary view ----

    /// Show a product's detail page.
    pub fn select_product(&mut self, id: ProductId) -> Result<&Product, StorefrontError> {
        let product = self.catalog.require(id)?;
        self.view = View::Detail(id);
        tracing::debug!(product_id = %id, "detail view opened");
        Ok(product)
    }

    /// Return to the listing.
    pub fn clear_selection(&mut self) {
        if !self.view.is_listing() {
            tracing::debug!("returned to listing");
        }
        self.view = View::Listing;
    }

    /// Navigate home: back to the listing with no panel open.
    pub fn go_home(&mut self) {
        self.clear_selection();
        self.panels = Panels::default();
    }

    /// The product on the detail page.
    pub fn selected_product(&self) -> Option<&Product> {
        self.view.selected().and_then(|id| self.catalog.get(id))
    }

    // ---- Quick view ----

    pub fn open_quick_view(&mut self, id: ProductId) -> Result<&Product, StorefrontError> {
        let product = self.catalog.require(id)?;
        self.panels.quick_view = Some(id);
        tracing::debug!(product_id = %id, "quick view opened");
        Ok(product)
    }

    pub fn close_quick_view(&mut self) {
        self.panels.quick_view = None;
    }

    pub fn quick_view_product(&self) -> Option<&Product> {
        self.panels.quick_view.and_then(|id| self.catalog.get(id))
    }

    /// Add the quick-viewed product to the cart and close the quick view.
    ///
    /// Returns `None` when no quick view is open.
    pub fn add_from_quick_view(&mut self) -> Option<i64> {
        let id = self.panels.quick_view?;
        let quantity = self.add_to_cart(id).ok()?;
        self.panels.quick_view = None;
        Some(quantity)
    }

    // ---- Cart ----

    /// Add one unit of a catalog product to the cart.
    ///
    /// Opens the cart panel when the store is configured to. Returns the
    /// entry's new quantity.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<i64, StorefrontError> {
        let product = self.catalog.require(id)?;
        let quantity = self.cart.add_or_increment(product);
        if self.config.open_cart_on_add {
            self.panels.cart = true;
        }
        Ok(quantity)
    }

    /// Set an entry's quantity; zero or below removes it. Absent ids are a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        self.cart.set_quantity(id, quantity)
    }

    pub fn increment(&mut self, id: ProductId) -> bool {
        self.cart.increment(id)
    }

    pub fn decrement(&mut self, id: ProductId) -> bool {
        self.cart.decrement(id)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.cart.remove(id)
    }

    /// The cart badge number.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    pub fn open_cart(&mut self) {
        self.panels.cart = true;
    }

    pub fn close_cart(&mut self) {
        self.panels.cart = false;
    }

    /// Place a simulated order.
    ///
    /// Clears the cart and closes its panel. An empty cart yields `None` and
    /// changes nothing.
    pub fn checkout(&mut self) -> Option<Receipt> {
        if self.cart.is_empty() {
            return None;
        }

        let receipt = Receipt::new(
            self.cart.summary(),
            self.identity.as_ref().map(|i| i.email().to_string()),
        );
        self.cart.clear();
        self.panels.cart = false;
        tracing::info!(
            total = %receipt.total(),
            items = receipt.item_count(),
            "checkout completed"
        );
        Some(receipt)
    }

    // ---- Authentication ----

    /// Open the auth modal on the given form.
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.panels.auth = true;
        self.auth_mode = mode;
        self.auth_error = None;
    }

    pub fn close_auth(&mut self) {
        self.panels.auth = false;
        self.auth_error = None;
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Switch between the login and signup forms, clearing any error.
    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
        self.auth_error = None;
    }

    /// Inline error under the auth form.
    pub fn auth_error(&self) -> Option<&AuthError> {
        self.auth_error.as_ref()
    }

    /// Sign in. On success the auth modal closes.
    pub fn login(&mut self, form: &LoginForm) -> Result<&SessionIdentity, StorefrontError> {
        let result = self.provider.login(form);
        self.finish_auth(result)
    }

    /// Create an account and sign in. On success the auth modal closes.
    pub fn signup(&mut self, form: &SignupForm) -> Result<&SessionIdentity, StorefrontError> {
        let result = self.provider.signup(form);
        self.finish_auth(result)
    }

    fn finish_auth(
        &mut self,
        result: Result<SessionIdentity, AuthError>,
    ) -> Result<&SessionIdentity, StorefrontError> {
        match result {
            Ok(identity) => {
                tracing::info!(email = %identity.email(), mode = self.auth_mode.as_str(), "signed in");
                self.auth_error = None;
                self.panels.auth = false;
                Ok(self.identity.insert(identity))
            }
            Err(e) => {
                tracing::warn!(error = %e, mode = self.auth_mode.as_str(), "auth form rejected");
                self.auth_error = Some(e.clone());
                Err(e.into())
            }
        }
    }

    /// Sign out. Signing out with no identity is a no-op.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(email = %identity.email(), "signed out");
        }
    }

    // ---- Add product ----

    pub fn open_add_product(&mut self) {
        self.panels.add_product = true;
        self.product_error = None;
    }

    pub fn close_add_product(&mut self) {
        self.panels.add_product = false;
        self.product_error = None;
    }

    /// Inline error under the add-product form.
    pub fn product_error(&self) -> Option<&CommerceError> {
        self.product_error.as_ref()
    }

    /// Validate and append a new product, closing the add-product modal.
    pub fn submit_product(&mut self, draft: ProductDraft) -> Result<&Product, StorefrontError> {
        let checked = draft.validate().map(|()| draft);
        let added = match checked {
            Ok(draft) => self.catalog.add(draft),
            Err(e) => Err(e),
        };

        match added {
            Ok(product) => {
                self.panels.add_product = false;
                self.product_error = None;
                Ok(product)
            }
            Err(e) => {
                tracing::warn!(error = %e, "add-product form rejected");
                self.product_error = Some(e.clone());
                Err(e.into())
            }
        }
    }

    // ---- Rendering ----

    /// Inline error for the form currently shown, if any.
    pub fn form_error(&self) -> Option<String> {
        if self.panels.auth {
            self.auth_error.as_ref().map(ToString::to_string)
        } else if self.panels.add_product {
            self.product_error.as_ref().map(ToString::to_string)
        } else {
            None
        }
    }

    /// Copy out everything needed to render the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            store_name: self.config.name.clone(),
            view: self.view,
            panels: self.panels,
            identity: self.identity.as_ref().map(|i| i.email().to_string()),
            search: self.search.clone(),
            criteria: self.criteria.clone(),
            listing: self.listing().into_iter().cloned().collect(),
            selected: self.selected_product().cloned(),
            quick_view: self.quick_view_product().cloned(),
            categories: self.category_facet(),
            brands: self.brand_facet(),
            cart: self.cart_summary(),
            form_error: self.form_error(),
        }
    }
}
