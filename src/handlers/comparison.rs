//! Price comparison across vendors.

use axum::response::{IntoResponse, Response};

use crate::error::ServiceResult;
use crate::http::response::ApiResponse;
use crate::store::VendorStore;

/// Offers whose material name contains `material_name`, cheapest first.
/// The fragment is used as-is: no trimming, no case folding.
pub async fn compare(store: &dyn VendorStore, material_name: &str) -> ServiceResult<Response> {
    let quotes = store.compare_prices(material_name).await?;
    tracing::debug!(fragment = %material_name, matches = quotes.len(), "Price comparison");
    Ok(ApiResponse::list(quotes).into_response())
}
