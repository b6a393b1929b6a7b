//! Vendor material CRUD and price updates.

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};

use crate::error::{ServiceError, ServiceResult};
use crate::handlers::parse_body;
use crate::http::response::{created, ApiResponse};
use crate::store::{PriceUpdate, VendorMaterial, VendorStore};

const NOT_FOUND: &str = "Vendor material not found";

/// Every material, joined with its vendor's name.
pub async fn list(store: &dyn VendorStore) -> ServiceResult<Response> {
    let materials = store.list_materials().await?;
    Ok(ApiResponse::list(materials).into_response())
}

/// Serves both `/vendors/{id}/materials` and `/vendor-materials/by-vendor/{id}`.
pub async fn list_by_vendor(store: &dyn VendorStore, vendor_id: i64) -> ServiceResult<Response> {
    let materials = store.list_materials_by_vendor(vendor_id).await?;
    Ok(ApiResponse::list(materials).into_response())
}

/// Create from `/vendor-materials`; the body names the vendor.
pub async fn create(store: &dyn VendorStore, body: &Bytes) -> ServiceResult<Response> {
    let material: VendorMaterial = parse_body(body)?;
    if material.vendor_id == 0 || material.material_name.is_empty() || material.price == 0.0 {
        return Err(ServiceError::Validation(
            "vendor_id, material_name, and price are required",
        ));
    }
    insert(store, material).await
}

/// Create from `/vendors/{id}/materials`; the path vendor overrides the body.
pub async fn create_for_vendor(
    store: &dyn VendorStore,
    vendor_id: i64,
    body: &Bytes,
) -> ServiceResult<Response> {
    let mut material: VendorMaterial = parse_body(body)?;
    material.vendor_id = vendor_id;
    if material.material_name.is_empty() || material.price == 0.0 {
        return Err(ServiceError::Validation("material_name and price are required"));
    }
    insert(store, material).await
}

async fn insert(store: &dyn VendorStore, mut material: VendorMaterial) -> ServiceResult<Response> {
    material.id = store.insert_material(&material).await?;

    tracing::info!(
        material_id = material.id,
        vendor_id = material.vendor_id,
        material = %material.material_name,
        "Vendor material added"
    );
    Ok(created(ApiResponse::with_message(
        "Vendor material added successfully",
        material,
    )))
}

/// Overwrite every field except the owning vendor. Like vendor updates, a
/// missing id still reports success.
pub async fn update(store: &dyn VendorStore, id: i64, body: &Bytes) -> ServiceResult<Response> {
    let mut material: VendorMaterial = parse_body(body)?;
    let affected = store.update_material(id, &material).await?;
    if affected == 0 {
        tracing::debug!(material_id = id, "Update matched no vendor material");
    }

    material.id = id;
    Ok(ApiResponse::with_message("Vendor material updated successfully", material).into_response())
}

pub async fn delete(store: &dyn VendorStore, id: i64) -> ServiceResult<Response> {
    if store.delete_material(id).await? == 0 {
        return Err(ServiceError::NotFound(NOT_FOUND));
    }
    Ok(ApiResponse::done("Vendor material deleted successfully").into_response())
}

/// Set a single material's price and return the stored row.
pub async fn update_price(store: &dyn VendorStore, body: &Bytes) -> ServiceResult<Response> {
    let update: PriceUpdate = parse_body(body)?;
    let new_price = match update.new_price {
        Some(price) if update.id != 0 => price,
        _ => return Err(ServiceError::Validation("id and new_price are required")),
    };
    if new_price < 0.0 {
        return Err(ServiceError::Validation("Price must be positive"));
    }

    let current = store
        .find_material(update.id)
        .await?
        .ok_or(ServiceError::NotFound(NOT_FOUND))?;
    store.update_material_price(update.id, new_price).await?;

    let updated = store
        .find_material(update.id)
        .await?
        .ok_or(ServiceError::NotFound(NOT_FOUND))?;

    tracing::info!(
        material_id = update.id,
        old_price = current.price,
        new_price,
        "Vendor material price updated"
    );
    let message = format!("Price for {} updated by vendor", current.material_name);
    Ok(ApiResponse::with_message(message, updated).into_response())
}
