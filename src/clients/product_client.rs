use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Category, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{CatalogError, ProductAction, ProductActionResult, ProductQuery};

/// Client for the product store.
///
/// One method per store operation. Mutations that the store refuses (unknown
/// id, invalid fields, unconfirmed delete) come back as `Ok(false)`; only a
/// broken channel is an error.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductId, CatalogError, product);

/// Maps store refusals to `false`, keeping channel faults as errors.
fn success<T>(result: Result<T, FrameworkError>) -> Result<bool, CatalogError> {
    match result {
        Ok(_) => Ok(true),
        Err(FrameworkError::NotFound(id)) => {
            debug!(%id, "Store has no such product");
            Ok(false)
        }
        Err(FrameworkError::Rejected(reason)) => {
            debug!(%reason, "Store rejected the request");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.list(ProductQuery::All).await?)
    }

    #[instrument(skip(self, description))]
    pub async fn add_product(
        &self,
        name: String,
        price: u64,
        description: String,
        category: Option<Category>,
    ) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        let params = ProductCreate { name, price, description, category };
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self, update), fields(name = %update.name, price = update.price))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<bool, CatalogError> {
        debug!("Sending request");
        success(self.inner.update(id, update).await)
    }

    #[instrument(skip(self))]
    pub async fn update_stock_status(
        &self,
        id: ProductId,
        in_stock: bool,
    ) -> Result<bool, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::SetStock(in_stock)).await {
            Ok(ProductActionResult::SetStock(_)) => Ok(true),
            Err(e) => success::<()>(Err(e)),
        }
    }

    /// Deletes a product. An unconfirmed delete is a no-op that reports `false`.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId, confirm: bool) -> Result<bool, CatalogError> {
        if !confirm {
            debug!("Delete not confirmed");
            return Ok(false);
        }
        debug!("Sending request");
        success(self.inner.delete(id).await)
    }

    #[instrument(skip(self))]
    pub async fn search_product_by_name(&self, term: String) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        Ok(self.inner.list(ProductQuery::NameContains(term)).await?)
    }

    #[instrument(skip(self))]
    pub async fn filter_products(
        &self,
        category: Option<Category>,
        in_stock: bool,
    ) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        let query = ProductQuery::Filter { category, in_stock_only: in_stock };
        Ok(self.inner.list(query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_delete, expect_list, expect_update,
    };

    #[tokio::test]
    async fn test_filter_sends_combined_query() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task =
            tokio::spawn(async move { client.filter_products(Some(Category::Game), true).await });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(
            query,
            ProductQuery::Filter { category: Some(Category::Game), in_stock_only: true }
        );
        responder.send(Ok(vec![])).unwrap();

        assert_eq!(task.await.unwrap(), Ok(vec![]));
    }

    #[tokio::test]
    async fn test_refusals_become_false() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let update_client = client.clone();
        let task = tokio::spawn(async move {
            let update = ProductUpdate {
                name: "Lamp".into(),
                price: 1,
                description: String::new(),
                category: None,
                in_stock: true,
            };
            update_client.update_product(9, update).await
        });
        let (id, _, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 9);
        responder.send(Err(FrameworkError::NotFound("9".into()))).unwrap();
        assert_eq!(task.await.unwrap(), Ok(false));

        let stock_client = client.clone();
        let task = tokio::spawn(async move { stock_client.update_stock_status(9, true).await });
        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ProductAction::SetStock(true));
        responder.send(Err(FrameworkError::NotFound("9".into()))).unwrap();
        assert_eq!(task.await.unwrap(), Ok(false));
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        assert_eq!(client.delete_product(4, false).await, Ok(false));
        assert!(receiver.try_recv().is_err());

        let task = tokio::spawn(async move { client.delete_product(4, true).await });
        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, 4);
        responder.send(Ok(())).unwrap();
        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_channel_fault_is_an_error() {
        let (inner, receiver) = create_mock_client::<Product>(1);
        drop(receiver);
        let client = ProductClient::new(inner);

        assert!(matches!(
            client.get_all_products().await,
            Err(CatalogError::ActorCommunicationError(_))
        ));
    }
}
