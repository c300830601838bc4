//! Product-specific store logic: validation, stock actions and list queries.

mod actions;
pub mod entity;
pub mod error;
mod query;

pub use actions::*;
pub use error::*;
pub use query::*;

use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::{Product, ProductId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates a new Product store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let product_id_counter = AtomicU64::new(1);
    let next_product_id =
        move || -> ProductId { product_id_counter.fetch_add(1, Ordering::SeqCst) };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_id);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
