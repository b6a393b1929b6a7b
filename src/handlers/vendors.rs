//! Vendor CRUD.

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};

use crate::error::{ServiceError, ServiceResult};
use crate::handlers::parse_body;
use crate::http::response::{created, ApiResponse};
use crate::store::{Vendor, VendorStore, DEFAULT_VENDOR_STATUS};

const NOT_FOUND: &str = "Vendor not found";

pub async fn list(store: &dyn VendorStore) -> ServiceResult<Response> {
    let vendors = store.list_vendors().await?;
    Ok(ApiResponse::list(vendors).into_response())
}

pub async fn get(store: &dyn VendorStore, id: i64) -> ServiceResult<Response> {
    let vendor = store
        .find_vendor(id)
        .await?
        .ok_or(ServiceError::NotFound(NOT_FOUND))?;
    Ok(ApiResponse::ok(vendor).into_response())
}

/// Insert a vendor. Status is always "Active" regardless of the body.
pub async fn create(store: &dyn VendorStore, body: &Bytes) -> ServiceResult<Response> {
    let mut vendor: Vendor = parse_body(body)?;
    if vendor.name.is_empty() {
        return Err(ServiceError::Validation("Vendor name is required"));
    }

    vendor.status = DEFAULT_VENDOR_STATUS.to_string();
    vendor.id = store.insert_vendor(&vendor).await?;

    tracing::info!(vendor_id = vendor.id, name = %vendor.name, "Vendor created");
    Ok(created(ApiResponse::with_message("Vendor created successfully", vendor)))
}

/// Overwrite every column of the vendor. A missing id affects no rows and
/// still reports success, echoing the body back.
pub async fn update(store: &dyn VendorStore, id: i64, body: &Bytes) -> ServiceResult<Response> {
    let mut vendor: Vendor = parse_body(body)?;
    let affected = store.update_vendor(id, &vendor).await?;
    if affected == 0 {
        tracing::debug!(vendor_id = id, "Update matched no vendor");
    }

    vendor.id = id;
    Ok(ApiResponse::with_message("Vendor updated successfully", vendor).into_response())
}

pub async fn delete(store: &dyn VendorStore, id: i64) -> ServiceResult<Response> {
    if store.delete_vendor(id).await? == 0 {
        return Err(ServiceError::NotFound(NOT_FOUND));
    }
    Ok(ApiResponse::done("Vendor deleted successfully").into_response())
}
