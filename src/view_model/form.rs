use crate::domain::{Category, Product, MAX_PRICE};
use crate::product_actor::CatalogError;

/// The add/edit form as the user typed it.
///
/// `price` is signed on purpose: the input box accepts anything and the
/// negative case is rejected before any request goes out.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub category: Option<Category>,
    pub in_stock: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: 0,
            description: String::new(),
            category: None,
            in_stock: true,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            // Lossless: the store caps prices at MAX_PRICE.
            price: product.price.min(MAX_PRICE) as i64,
            description: product.description.clone(),
            category: product.category,
            in_stock: product.in_stock,
        }
    }
}

/// Converts a typed-in price to a store price, refusing negatives.
pub fn checked_price(price: i64) -> Result<u64, CatalogError> {
    u64::try_from(price).map_err(|_| CatalogError::NegativePrice(price))
}
