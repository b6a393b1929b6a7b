//! Data access subsystem.
//!
//! # Data Flow
//! ```text
//! handlers
//!     → VendorStore (trait object held in AppState)
//!     → mysql.rs  (sqlx, parameterized statements)
//!       memory.rs (in-process maps, same semantics)
//!     → typed records (types.rs)
//! ```
//!
//! # Design Decisions
//! - Every write is a single statement; nothing spans a transaction
//! - Update/delete report rows affected; handlers decide what zero means
//! - Store errors carry the driver's text, which reaches the client

pub mod memory;
pub mod mysql;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;
pub use types::{PriceQuote, PriceUpdate, Vendor, VendorMaterial, DEFAULT_VENDOR_STATUS};

/// Errors raised by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database driver reported a failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A material referenced a vendor that does not exist.
    #[error("Vendor {0} does not exist")]
    UnknownVendor(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for vendors and their materials.
#[async_trait]
pub trait VendorStore: Send + Sync {
    /// All vendors ordered by name.
    async fn list_vendors(&self) -> StoreResult<Vec<Vendor>>;

    async fn find_vendor(&self, id: i64) -> StoreResult<Option<Vendor>>;

    /// Insert a vendor and return the assigned id.
    async fn insert_vendor(&self, vendor: &Vendor) -> StoreResult<i64>;

    /// Overwrite every column of vendor `id`. Returns rows affected.
    async fn update_vendor(&self, id: i64, vendor: &Vendor) -> StoreResult<u64>;

    async fn delete_vendor(&self, id: i64) -> StoreResult<u64>;

    /// All materials joined with their vendor's name, ordered by material
    /// name then vendor name.
    async fn list_materials(&self) -> StoreResult<Vec<VendorMaterial>>;

    /// Materials of one vendor ordered by material name. Vendor name is not
    /// populated.
    async fn list_materials_by_vendor(&self, vendor_id: i64) -> StoreResult<Vec<VendorMaterial>>;

    async fn find_material(&self, id: i64) -> StoreResult<Option<VendorMaterial>>;

    async fn insert_material(&self, material: &VendorMaterial) -> StoreResult<i64>;

    /// Overwrite every column of material `id` except `vendor_id`.
    async fn update_material(&self, id: i64, material: &VendorMaterial) -> StoreResult<u64>;

    async fn update_material_price(&self, id: i64, price: f64) -> StoreResult<u64>;

    async fn delete_material(&self, id: i64) -> StoreResult<u64>;

    /// Materials whose name contains `fragment`, cheapest first, each with
    /// the supplying vendor's rating.
    async fn compare_prices(&self, fragment: &str) -> StoreResult<Vec<PriceQuote>>;

    /// Release pooled connections.
    async fn close(&self);
}
