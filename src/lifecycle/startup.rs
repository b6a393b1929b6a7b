//! Startup orchestration.

use std::sync::Arc;

use crate::config::{DatabaseConfig, StoreBackend};
use crate::store::{MemoryStore, MySqlStore, StoreResult, VendorStore};

/// Open the configured store. Any error here should abort the process.
pub async fn open_store(config: &DatabaseConfig) -> StoreResult<Arc<dyn VendorStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Mysql => {
            let store = MySqlStore::connect(config).await?;
            if config.init_schema {
                store.init_schema().await?;
                tracing::info!("Vendor schema ensured");
            }
            tracing::info!(
                host = %config.host,
                database = %config.name,
                "Vendor Service connected to MySQL"
            );
            Ok(Arc::new(store))
        }
    }
}
