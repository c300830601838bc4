//! # Catalog Manager
//!
//! Product catalog management over a request/response store.
//!
//! - [`session::SessionController`] signs a user in through an
//!   [`session::IdentityProvider`] and owns the resulting [`domain::Session`].
//! - [`view_model::CatalogViewModel`] is mounted with that session and drives
//!   the store through a [`clients::ProductClient`], re-fetching after every write.
//! - [`app_system::CatalogSystem`] starts the store actor and shuts it down.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod product_actor;
pub mod session;
pub mod view_model;

#[cfg(test)]
mod mock_framework;
