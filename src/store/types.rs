//! Vendor catalog records.
//!
//! These are both the wire shapes (JSON request/response bodies) and the
//! values the stores hand back. Request bodies are decoded leniently: every
//! field defaults, so a body that omits `notes` or sends `"rating": null` is
//! still valid.

use serde::{Deserialize, Deserializer, Serialize};

/// Status assigned to every vendor at creation time.
pub const DEFAULT_VENDOR_STATUS: &str = "Active";

/// Treat an explicit JSON `null` like an omitted field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A supplier with contact and rating metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Vendor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_person: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

/// A priced offering of a material by a single vendor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VendorMaterial {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vendor_id: i64,
    /// Only populated by reads that join the vendors table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub material_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stock_available: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_order_quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_time_days: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

/// One row of a cross-vendor price comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    #[serde(flatten)]
    pub material: VendorMaterial,
    pub vendor_rating: f64,
}

/// Body of `POST /vendor-materials/update-price`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceUpdate {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub new_price: Option<f64>,
}
