use catalog_manager::app_system::{setup_tracing, CatalogConfig, CatalogSystem};
use catalog_manager::domain::{Category, Principal};
use catalog_manager::session::{InMemoryIdentityProvider, SessionController};
use catalog_manager::view_model::CatalogViewModel;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::load(&path).map_err(|e| e.to_string())?,
        None => CatalogConfig::default(),
    };
    setup_tracing(&config.log_filter);

    info!("Starting product manager");
    let system = CatalogSystem::new(&config);

    let provider = InMemoryIdentityProvider::approving(Principal::new("2vxsx-fae"));
    let mut sessions = SessionController::new(provider, config.login_options());
    if !sessions.initialize().await.is_authenticated && !sessions.login().await {
        return Err("Login failed".to_string());
    }

    let span = tracing::info_span!("catalog");
    async {
        let mut catalog = CatalogViewModel::mount(system.product_client.clone(), sessions.session())
            .await
            .map_err(|e| e.to_string())?;
        info!(principal = %catalog.principal(), "Authenticated");

        // Values as they arrive from the form's select box.
        let category = Category::parse_optional("Furniture").map_err(|e| e.to_string())?;
        let id = catalog
            .add("Lamp".into(), 20, "desk lamp".into(), category)
            .await
            .map_err(|e| e.to_string())?;
        catalog.update_stock(id, false).await.map_err(|e| e.to_string())?;
        catalog.set_category(category).await.map_err(|e| e.to_string())?;
        for product in catalog.filtered_products() {
            info!(%product, "Listed");
        }

        catalog.delete(id).await.map_err(|e| e.to_string())?;
        info!(remaining = catalog.products().len(), "Catalog after delete");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    sessions.logout().await;
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
