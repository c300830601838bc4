use super::actions::{ProductAction, ProductActionResult};
use super::query::ProductQuery;
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductId, ProductUpdate, MAX_PRICE};

fn require_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err("Product name must not be empty".to_string())
    } else {
        Ok(())
    }
}

fn require_price(price: u64) -> Result<(), String> {
    if price > MAX_PRICE {
        Err(format!("Price {} exceeds the maximum of {}", price, MAX_PRICE))
    } else {
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ProductQuery;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// New products start out in stock.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        require_name(&params.name)?;
        require_price(params.price)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            description: params.description,
            category: params.category,
            in_stock: true,
        })
    }

    /// Replaces every editable field. The id is never touched.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), String> {
        require_name(&update.name)?;
        require_price(update.price)?;
        self.name = update.name;
        self.price = update.price;
        self.description = update.description;
        self.category = update.category;
        self.in_stock = update.in_stock;
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::SetStock(in_stock) => {
                self.in_stock = in_stock;
                Ok(ProductActionResult::SetStock(self.in_stock))
            }
        }
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        query.matches(self)
    }
}
