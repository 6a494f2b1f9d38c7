use tracing::info;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::QueryDispatcher;
use crate::core::domain::Configuration;
use crate::core::library::StoreResult;
use crate::core::repository::RepositoryStore;

pub fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> StoreResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config, store)?;
    info!(branch = config.branch_id.as_str(), %store, "created catalog service");
    Ok(Box::new(QueryDispatcher::new(book_repo)))
}
