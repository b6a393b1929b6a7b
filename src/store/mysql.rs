//! MySQL-backed vendor store.

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::FromRow;

use crate::config::DatabaseConfig;
use crate::pricing::like_pattern;
use crate::store::{PriceQuote, StoreError, StoreResult, Vendor, VendorMaterial, VendorStore};

const SCHEMA: &str = include_str!("../../migrations/0001_vendors.sql");

const VENDOR_COLUMNS: &str = "id, name, COALESCE(contact_person, '') AS contact_person, \
     COALESCE(phone, '') AS phone, COALESCE(email, '') AS email, \
     COALESCE(address, '') AS address, rating, COALESCE(status, '') AS status, \
     COALESCE(notes, '') AS notes";

const MATERIAL_COLUMNS: &str = "vm.id, vm.vendor_id, vm.material_name, vm.price, \
     COALESCE(vm.unit, '') AS unit, vm.stock_available, vm.min_order_quantity, \
     vm.delivery_time_days, COALESCE(vm.notes, '') AS notes";

#[derive(Debug, FromRow)]
struct VendorRow {
    id: i32,
    name: String,
    contact_person: String,
    phone: String,
    email: String,
    address: String,
    rating: Option<Decimal>,
    status: String,
    notes: String,
}

impl From<VendorRow> for Vendor {
    fn from(row: VendorRow) -> Self {
        Self {
            id: i64::from(row.id),
            name: row.name,
            contact_person: row.contact_person,
            phone: row.phone,
            email: row.email,
            address: row.address,
            rating: decimal_to_f64(row.rating),
            status: row.status,
            notes: row.notes,
        }
    }
}

#[derive(Debug, FromRow)]
struct MaterialRow {
    id: i32,
    vendor_id: i32,
    #[sqlx(default)]
    vendor_name: Option<String>,
    material_name: String,
    price: Decimal,
    unit: String,
    stock_available: Option<i32>,
    min_order_quantity: Option<i32>,
    delivery_time_days: Option<i32>,
    notes: String,
    #[sqlx(default)]
    vendor_rating: Option<Decimal>,
}

impl From<MaterialRow> for VendorMaterial {
    fn from(row: MaterialRow) -> Self {
        Self {
            id: i64::from(row.id),
            vendor_id: i64::from(row.vendor_id),
            vendor_name: row.vendor_name,
            material_name: row.material_name,
            price: row.price.to_f64().unwrap_or_default(),
            unit: row.unit,
            stock_available: row.stock_available.map(i64::from).unwrap_or_default(),
            min_order_quantity: row.min_order_quantity.map(i64::from).unwrap_or_default(),
            delivery_time_days: row.delivery_time_days.map(i64::from).unwrap_or_default(),
            notes: row.notes,
        }
    }
}

fn decimal_to_f64(value: Option<Decimal>) -> f64 {
    value.and_then(|d| d.to_f64()).unwrap_or_default()
}

/// Vendor store over a pooled MySQL connection.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Open a connection pool and verify the database is reachable.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the vendor tables if they do not exist yet.
    pub async fn init_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl VendorStore for MySqlStore {
    async fn list_vendors(&self) -> StoreResult<Vec<Vendor>> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendors ORDER BY name");
        let rows: Vec<VendorRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Vendor::from).collect())
    }

    async fn find_vendor(&self, id: i64) -> StoreResult<Option<Vendor>> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE id = ?");
        let row: Option<VendorRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Vendor::from))
    }

    async fn insert_vendor(&self, vendor: &Vendor) -> StoreResult<i64> {
        let result = sqlx::query(
            "INSERT INTO vendors (name, contact_person, phone, email, address, rating, status, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&vendor.name)
        .bind(&vendor.contact_person)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .bind(&vendor.address)
        .bind(vendor.rating)
        .bind(&vendor.status)
        .bind(&vendor.notes)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i64)
    }

    async fn update_vendor(&self, id: i64, vendor: &Vendor) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE vendors SET name = ?, contact_person = ?, phone = ?, email = ?, address = ?, \
             rating = ?, status = ?, notes = ? WHERE id = ?",
        )
        .bind(&vendor.name)
        .bind(&vendor.contact_person)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .bind(&vendor.address)
        .bind(vendor.rating)
        .bind(&vendor.status)
        .bind(&vendor.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_vendor(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_materials(&self) -> StoreResult<Vec<VendorMaterial>> {
        let sql = format!(
            "SELECT {MATERIAL_COLUMNS}, v.name AS vendor_name \
             FROM vendor_materials vm JOIN vendors v ON vm.vendor_id = v.id \
             ORDER BY vm.material_name, v.name"
        );
        let rows: Vec<MaterialRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(VendorMaterial::from).collect())
    }

    async fn list_materials_by_vendor(&self, vendor_id: i64) -> StoreResult<Vec<VendorMaterial>> {
        let sql = format!(
            "SELECT {MATERIAL_COLUMNS} FROM vendor_materials vm \
             WHERE vm.vendor_id = ? ORDER BY vm.material_name"
        );
        let rows: Vec<MaterialRow> = sqlx::query_as(&sql)
            .bind(vendor_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(VendorMaterial::from).collect())
    }

    async fn find_material(&self, id: i64) -> StoreResult<Option<VendorMaterial>> {
        let sql = format!("SELECT {MATERIAL_COLUMNS} FROM vendor_materials vm WHERE vm.id = ?");
        let row: Option<MaterialRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(VendorMaterial::from))
    }

    async fn insert_material(&self, material: &VendorMaterial) -> StoreResult<i64> {
        // Inserts nothing when the vendor is missing.
        let result = sqlx::query(
            "INSERT INTO vendor_materials (vendor_id, material_name, price, unit, stock_available, \
             min_order_quantity, delivery_time_days, notes) \
             SELECT id, ?, ?, ?, ?, ?, ?, ? FROM vendors WHERE id = ?",
        )
        .bind(&material.material_name)
        .bind(material.price)
        .bind(&material.unit)
        .bind(material.stock_available)
        .bind(material.min_order_quantity)
        .bind(material.delivery_time_days)
        .bind(&material.notes)
        .bind(material.vendor_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::UnknownVendor(material.vendor_id));
        }
        Ok(result.last_insert_id() as i64)
    }

    async fn update_material(&self, id: i64, material: &VendorMaterial) -> StoreResult<u64> {
        // vendor_id is fixed at creation.
        let result = sqlx::query(
            "UPDATE vendor_materials SET material_name = ?, price = ?, unit = ?, stock_available = ?, \
             min_order_quantity = ?, delivery_time_days = ?, notes = ? WHERE id = ?",
        )
        .bind(&material.material_name)
        .bind(material.price)
        .bind(&material.unit)
        .bind(material.stock_available)
        .bind(material.min_order_quantity)
        .bind(material.delivery_time_days)
        .bind(&material.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn update_material_price(&self, id: i64, price: f64) -> StoreResult<u64> {
        let result = sqlx::query("UPDATE vendor_materials SET price = ? WHERE id = ?")
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_material(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM vendor_materials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn compare_prices(&self, fragment: &str) -> StoreResult<Vec<PriceQuote>> {
        let sql = format!(
            "SELECT {MATERIAL_COLUMNS}, v.name AS vendor_name, v.rating AS vendor_rating \
             FROM vendor_materials vm JOIN vendors v ON vm.vendor_id = v.id \
             WHERE vm.material_name LIKE ? \
             ORDER BY vm.price ASC, vm.id ASC"
        );
        let rows: Vec<MaterialRow> = sqlx::query_as(&sql)
            .bind(like_pattern(fragment))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let vendor_rating = decimal_to_f64(row.vendor_rating);
                PriceQuote {
                    material: VendorMaterial::from(row),
                    vendor_rating,
                }
            })
            .collect())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
