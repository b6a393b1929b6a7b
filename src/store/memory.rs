//! In-process vendor store.
//!
//! Mirrors the MySQL store's observable behavior: a material can only be
//! added for an existing vendor, and deleting a vendor leaves its materials
//! in place. Ids are assigned from per-table counters and never reused.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::pricing::rank_offers;
use crate::store::{PriceQuote, StoreError, StoreResult, Vendor, VendorMaterial, VendorStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    vendors: DashMap<i64, Vendor>,
    materials: DashMap<i64, VendorMaterial>,
    next_vendor_id: AtomicI64,
    next_material_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn vendors_by_id(&self) -> Vec<Vendor> {
        let mut vendors: Vec<Vendor> = self.vendors.iter().map(|e| e.value().clone()).collect();
        vendors.sort_by_key(|v| v.id);
        vendors
    }

    fn materials_by_id(&self) -> Vec<VendorMaterial> {
        let mut materials: Vec<VendorMaterial> =
            self.materials.iter().map(|e| e.value().clone()).collect();
        materials.sort_by_key(|m| m.id);
        materials
    }
}

#[async_trait]
impl VendorStore for MemoryStore {
    async fn list_vendors(&self) -> StoreResult<Vec<Vendor>> {
        let mut vendors = self.vendors_by_id();
        vendors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(vendors)
    }

    async fn find_vendor(&self, id: i64) -> StoreResult<Option<Vendor>> {
        Ok(self.vendors.get(&id).map(|v| v.value().clone()))
    }

    async fn insert_vendor(&self, vendor: &Vendor) -> StoreResult<i64> {
        let id = self.next_vendor_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.vendors.insert(id, Vendor { id, ..vendor.clone() });
        Ok(id)
    }

    async fn update_vendor(&self, id: i64, vendor: &Vendor) -> StoreResult<u64> {
        match self.vendors.get_mut(&id) {
            Some(mut existing) => {
                *existing = Vendor { id, ..vendor.clone() };
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_vendor(&self, id: i64) -> StoreResult<u64> {
        // Materials stay behind; joined reads drop them.
        Ok(self.vendors.remove(&id).map_or(0, |_| 1))
    }

    async fn list_materials(&self) -> StoreResult<Vec<VendorMaterial>> {
        let mut joined: Vec<VendorMaterial> = self
            .materials_by_id()
            .into_iter()
            .filter_map(|m| {
                let vendor_name = self.vendors.get(&m.vendor_id)?.name.clone();
                Some(VendorMaterial {
                    vendor_name: Some(vendor_name),
                    ..m
                })
            })
            .collect();
        joined.sort_by(|a, b| {
            a.material_name
                .cmp(&b.material_name)
                .then_with(|| a.vendor_name.cmp(&b.vendor_name))
        });
        Ok(joined)
    }

    async fn list_materials_by_vendor(&self, vendor_id: i64) -> StoreResult<Vec<VendorMaterial>> {
        let mut materials: Vec<VendorMaterial> = self
            .materials_by_id()
            .into_iter()
            .filter(|m| m.vendor_id == vendor_id)
            .map(|m| VendorMaterial {
                vendor_name: None,
                ..m
            })
            .collect();
        materials.sort_by(|a, b| a.material_name.cmp(&b.material_name));
        Ok(materials)
    }

    async fn find_material(&self, id: i64) -> StoreResult<Option<VendorMaterial>> {
        Ok(self.materials.get(&id).map(|m| m.value().clone()))
    }

    async fn insert_material(&self, material: &VendorMaterial) -> StoreResult<i64> {
        if !self.vendors.contains_key(&material.vendor_id) {
            return Err(StoreError::UnknownVendor(material.vendor_id));
        }
        let id = self.next_material_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.materials.insert(
            id,
            VendorMaterial {
                id,
                vendor_name: None,
                ..material.clone()
            },
        );
        Ok(id)
    }

    async fn update_material(&self, id: i64, material: &VendorMaterial) -> StoreResult<u64> {
        match self.materials.get_mut(&id) {
            Some(mut existing) => {
                let vendor_id = existing.vendor_id;
                *existing = VendorMaterial {
                    id,
                    vendor_id,
                    vendor_name: None,
                    ..material.clone()
                };
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_material_price(&self, id: i64, price: f64) -> StoreResult<u64> {
        match self.materials.get_mut(&id) {
            Some(mut existing) => {
                existing.price = price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_material(&self, id: i64) -> StoreResult<u64> {
        Ok(self.materials.remove(&id).map_or(0, |_| 1))
    }

    async fn compare_prices(&self, fragment: &str) -> StoreResult<Vec<PriceQuote>> {
        let vendors = self.vendors_by_id();
        let materials = self.materials_by_id();
        Ok(rank_offers(&vendors, &materials, fragment))
    }

    async fn close(&self) {}
}
