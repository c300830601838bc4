use std::fmt;

use super::Category;

/// Store-assigned product identifier. Never reused.
pub type ProductId = u64;

/// Highest price the store accepts. Prices stay within what the edit form's
/// signed field can hold.
pub const MAX_PRICE: u64 = i64::MAX as u64;

/// A product in the catalog.
///
/// The store owns these records; clients only ever hold copies taken from the
/// last fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub description: String,
    pub category: Option<Category>,
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u64,
        description: impl Into<String>,
        category: Option<Category>,
        in_stock: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            category,
            in_stock,
        }
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} - $ {} ({})", self.id, self.name, self.price, self.stock_label())?;
        if let Some(category) = self.category {
            write!(f, " [{}]", category)?;
        }
        Ok(())
    }
}

/// Parameters for creating a product. The store assigns the id and stock flag.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u64,
    pub description: String,
    pub category: Option<Category>,
}

/// Full replacement of a product's editable fields.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub price: u64,
    pub description: String,
    pub category: Option<Category>,
    pub in_stock: bool,
}
