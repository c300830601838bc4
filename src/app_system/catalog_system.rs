use tracing::{error, info};

use crate::app_system::CatalogConfig;
use crate::clients::ProductClient;
use crate::product_actor;

/// Owns the running store actor and hands out clients to it.
pub struct CatalogSystem {
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    pub fn new(config: &CatalogConfig) -> Self {
        info!(buffer_size = config.buffer_size, "Starting catalog system");
        let (product_actor, product_client) = product_actor::new(config.buffer_size);
        let product_handle = tokio::spawn(product_actor.run());

        Self {
            product_client,
            handles: vec![product_handle],
        }
    }

    /// Stops the store and waits for it.
    ///
    /// The actor exits once every client is gone, so any view-model built on
    /// a cloned client must be dropped before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
