/// Custom actions for Product entities, beyond plain CRUD.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Sets the stock flag without touching any other field.
    SetStock(bool),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The stock flag after the update.
    SetStock(bool),
}
