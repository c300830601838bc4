//! The catalog screen's state and the actions a user can take on it.
//!
//! Every mutation goes to the store first and is followed by a full re-fetch;
//! nothing is patched locally. Search and the category/stock filter both
//! write `filtered_products`, and whichever ran last wins.

mod form;

pub use form::*;

use tracing::{debug, info, instrument, warn};

use crate::clients::ProductClient;
use crate::domain::{Category, Principal, Product, ProductId, ProductUpdate, Session};
use crate::product_actor::CatalogError;

/// What [`CatalogViewModel::submit`] ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Added(ProductId),
    Updated(bool),
}

pub struct CatalogViewModel {
    client: ProductClient,
    principal: Principal,
    products: Vec<Product>,
    filtered_products: Vec<Product>,
    search_term: String,
    selected_category: Option<Category>,
    in_stock_filter: bool,
    editing_product: Option<Product>,
    pub form: ProductForm,
}

fn reject_negative(price: i64) -> Result<u64, CatalogError> {
    checked_price(price).inspect_err(|_| warn!(price, "Price cannot be negative"))
}

impl CatalogViewModel {
    /// Builds the view-model for a signed-in session and loads the catalog.
    #[instrument(skip(client, session))]
    pub async fn mount(client: ProductClient, session: &Session) -> Result<Self, CatalogError> {
        let principal = match (&session.principal, session.is_authenticated) {
            (Some(principal), true) => principal.clone(),
            _ => return Err(CatalogError::NotSignedIn),
        };
        info!(%principal, "Mounting catalog");

        let mut view_model = Self {
            client,
            principal,
            products: Vec::new(),
            filtered_products: Vec::new(),
            search_term: String::new(),
            selected_category: None,
            in_stock_filter: false,
            editing_product: None,
            form: ProductForm::default(),
        };
        view_model.fetch_all().await?;
        Ok(view_model)
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The list currently on screen.
    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn in_stock_filter(&self) -> bool {
        self.in_stock_filter
    }

    pub fn editing_product(&self) -> Option<&Product> {
        self.editing_product.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_product.is_some()
    }

    #[instrument(skip(self))]
    pub async fn fetch_all(&mut self) -> Result<(), CatalogError> {
        let products = self.client.get_all_products().await?;
        info!(count = products.len(), "Fetched products");
        self.filtered_products = products.clone();
        self.products = products;
        Ok(())
    }

    #[instrument(skip(self, description))]
    pub async fn add(
        &mut self,
        name: String,
        price: i64,
        description: String,
        category: Option<Category>,
    ) -> Result<ProductId, CatalogError> {
        let price = reject_negative(price)?;
        let id = self.client.add_product(name, price, description, category).await?;
        info!(id, "Product added");
        self.reset_form();
        self.fetch_all().await?;
        Ok(id)
    }

    /// Returns the store's verdict. On `false` the form is left as it was so the
    /// user can try again.
    #[instrument(skip(self, description))]
    pub async fn update(
        &mut self,
        id: ProductId,
        name: String,
        price: i64,
        description: String,
        category: Option<Category>,
        in_stock: bool,
    ) -> Result<bool, CatalogError> {
        let price = reject_negative(price)?;
        let update = ProductUpdate { name, price, description, category, in_stock };
        let updated = self.client.update_product(id, update).await?;
        if updated {
            info!(id, "Product updated");
            self.reset_form();
            self.fetch_all().await?;
        } else {
            debug!(id, "Update not applied");
        }
        Ok(updated)
    }

    pub fn start_edit(&mut self, product: &Product) {
        self.form = ProductForm::from_product(product);
        self.editing_product = Some(product.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Sends the form: an update of the product being edited, or a new product.
    pub async fn submit(&mut self) -> Result<Submitted, CatalogError> {
        let form = self.form.clone();
        match self.editing_product.as_ref().map(|p| p.id) {
            Some(id) => self
                .update(id, form.name, form.price, form.description, form.category, form.in_stock)
                .await
                .map(Submitted::Updated),
            None => self
                .add(form.name, form.price, form.description, form.category)
                .await
                .map(Submitted::Added),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_stock(
        &mut self,
        id: ProductId,
        in_stock: bool,
    ) -> Result<bool, CatalogError> {
        let updated = self.client.update_stock_status(id, in_stock).await?;
        if updated {
            self.fetch_all().await?;
        }
        Ok(updated)
    }

    /// Flips the stock flag of a product on screen. Unknown ids are a no-op.
    pub async fn toggle_stock(&mut self, id: ProductId) -> Result<bool, CatalogError> {
        let current = self.filtered_products.iter().find(|p| p.id == id).map(|p| p.in_stock);
        match current {
            Some(in_stock) => self.update_stock(id, !in_stock).await,
            None => Ok(false),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: ProductId) -> Result<bool, CatalogError> {
        let deleted = self.client.delete_product(id, true).await?;
        if deleted {
            info!(id, "Product deleted");
            self.fetch_all().await?;
        }
        Ok(deleted)
    }

    /// An empty term restores the last full fetch without asking the store.
    #[instrument(skip(self))]
    pub async fn search_by_name(&mut self, term: &str) -> Result<(), CatalogError> {
        self.search_term = term.to_string();
        if term.is_empty() {
            self.filtered_products = self.products.clone();
        } else {
            self.filtered_products = self.client.search_product_by_name(term.to_string()).await?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn filter_by_category_and_stock(&mut self) -> Result<(), CatalogError> {
        self.filtered_products = self
            .client
            .filter_products(self.selected_category, self.in_stock_filter)
            .await?;
        debug!(count = self.filtered_products.len(), "Filter applied");
        Ok(())
    }

    /// Changes the category filter and recomputes the list if it changed.
    pub async fn set_category(&mut self, category: Option<Category>) -> Result<(), CatalogError> {
        if self.selected_category == category {
            return Ok(());
        }
        self.selected_category = category;
        self.filter_by_category_and_stock().await
    }

    /// Changes the stock filter and recomputes the list if it changed.
    pub async fn set_in_stock_filter(&mut self, in_stock: bool) -> Result<(), CatalogError> {
        if self.in_stock_filter == in_stock {
            return Ok(());
        }
        self.in_stock_filter = in_stock;
        self.filter_by_category_and_stock().await
    }

    pub async fn toggle_in_stock_filter(&mut self) -> Result<(), CatalogError> {
        self.set_in_stock_filter(!self.in_stock_filter).await
    }

    fn reset_form(&mut self) {
        self.form = ProductForm::default();
        self.editing_product = None;
    }
}
