use crate::domain::{Category, Product};

/// Selection criteria for listing products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductQuery {
    All,
    /// Case-insensitive substring match on the name.
    NameContains(String),
    /// `None` matches every category; `in_stock_only == false` applies no stock restriction.
    Filter {
        category: Option<Category>,
        in_stock_only: bool,
    },
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductQuery::All => true,
            ProductQuery::NameContains(term) => product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            ProductQuery::Filter { category, in_stock_only } => {
                let category_ok = category.map_or(true, |c| product.category == Some(c));
                category_ok && (!in_stock_only || product.in_stock)
            }
        }
    }
}
