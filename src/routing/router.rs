//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve `(method, path)` to an [`Action`] plus path parameters
//! - Distinguish no-match, bad identifier and unsupported method
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - First structural match wins; table order encodes precedence
//! - Aliases are separate rows pointing at the same action

use axum::http::Method;

use crate::routing::matcher::{split_path, MatchOutcome, PathParams, PathPattern};

/// Operation a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ServiceInfo,
    ListVendors,
    CreateVendor,
    GetVendor,
    UpdateVendor,
    DeleteVendor,
    ListMaterials,
    CreateMaterial,
    ListVendorMaterials,
    CreateVendorMaterial,
    UpdateMaterial,
    DeleteMaterial,
    UpdateMaterialPrice,
    ComparePrices,
}

impl Action {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ServiceInfo => "service_info",
            Action::ListVendors => "list_vendors",
            Action::CreateVendor => "create_vendor",
            Action::GetVendor => "get_vendor",
            Action::UpdateVendor => "update_vendor",
            Action::DeleteVendor => "delete_vendor",
            Action::ListMaterials => "list_materials",
            Action::CreateMaterial => "create_material",
            Action::ListVendorMaterials => "list_vendor_materials",
            Action::CreateVendorMaterial => "create_vendor_material",
            Action::UpdateMaterial => "update_material",
            Action::DeleteMaterial => "delete_material",
            Action::UpdateMaterialPrice => "update_material_price",
            Action::ComparePrices => "compare_prices",
        }
    }
}

/// Result of resolving a request against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched { action: Action, params: PathParams },
    MethodNotAllowed,
    /// A numeric path identifier failed to parse; carries the client message.
    InvalidParam(String),
    NotFound,
}

#[derive(Debug)]
struct Route {
    pattern: PathPattern,
    methods: Vec<(Method, Action)>,
}

/// Compiled, ordered route table.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Earlier routes take precedence.
    pub fn route(mut self, template: &'static str, methods: &[(Method, Action)]) -> Self {
        self.routes.push(Route {
            pattern: PathPattern::parse(template),
            methods: methods.to_vec(),
        });
        self
    }

    /// The vendor service's HTTP surface.
    pub fn vendor_service() -> Self {
        use Action::*;

        Self::new()
            .route("/", &[(Method::GET, ServiceInfo)])
            .route("/vendors", &[(Method::GET, ListVendors), (Method::POST, CreateVendor)])
            .route(
                "/vendors/{vendor_id}",
                &[(Method::GET, GetVendor), (Method::PUT, UpdateVendor), (Method::DELETE, DeleteVendor)],
            )
            .route(
                "/vendors/{vendor_id}/materials",
                &[(Method::GET, ListVendorMaterials), (Method::POST, CreateVendorMaterial)],
            )
            // Only PUT and DELETE address the material; GET and POST fall
            // back to the vendor's collection.
            .route(
                "/vendors/{vendor_id}/materials/{material_id}",
                &[
                    (Method::GET, ListVendorMaterials),
                    (Method::POST, CreateVendorMaterial),
                    (Method::PUT, UpdateMaterial),
                    (Method::DELETE, DeleteMaterial),
                ],
            )
            .route("/vendor-materials", &[(Method::GET, ListMaterials), (Method::POST, CreateMaterial)])
            .route("/vendor-materials/update-price", &[(Method::POST, UpdateMaterialPrice)])
            .route(
                "/vendor-materials/by-vendor/{vendor_id}",
                &[(Method::GET, ListVendorMaterials)],
            )
            .route(
                "/vendor-materials/{material_id}",
                &[(Method::PUT, UpdateMaterial), (Method::DELETE, DeleteMaterial)],
            )
            .route(
                "/materials/price-comparison/{material_name:text}",
                &[(Method::GET, ComparePrices)],
            )
    }

    /// Templates in precedence order.
    pub fn templates(&self) -> impl Iterator<Item = &PathPattern> {
        self.routes.iter().map(|r| &r.pattern)
    }

    pub fn resolve(&self, method: &Method, path: &str) -> Resolution {
        let segments = split_path(path);
        let mut invalid = None;

        for route in &self.routes {
            match route.pattern.matches(&segments) {
                MatchOutcome::Matched(params) => {
                    return match route.methods.iter().find(|(m, _)| m == method) {
                        Some((_, action)) => Resolution::Matched { action: *action, params },
                        None => Resolution::MethodNotAllowed,
                    };
                }
                MatchOutcome::InvalidParam(name) => {
                    invalid.get_or_insert(name);
                }
                MatchOutcome::NoMatch => {}
            }
        }

        match invalid {
            Some(name) => Resolution::InvalidParam(invalid_id_message(name)),
            None => Resolution::NotFound,
        }
    }
}

/// `vendor_id` → "Invalid vendor ID".
fn invalid_id_message(param: &str) -> String {
    let entity = param.strip_suffix("_id").unwrap_or(param).replace('_', " ");
    format!("Invalid {entity} ID")
}
