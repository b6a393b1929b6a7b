//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single dispatch handler
//! - Wire up middleware (request ID, tracing, body limit, CORS)
//! - Resolve requests through the route table
//! - Invoke resource handlers against the shared store
//! - Observability (metrics, request IDs in logs)

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::handlers::{self, comparison, materials, vendors};
use crate::http::middleware::cors;
use crate::http::request::{request_id, RequestUuid};
use crate::observability::metrics;
use crate::routing::{Action, PathParams, Resolution, RouteTable};
use crate::store::VendorStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VendorStore>,
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the vendor service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: ServiceConfig, store: Arc<dyn VendorStore>) -> Self {
        let routes = Arc::new(RouteTable::vendor_service());
        for pattern in routes.templates() {
            tracing::debug!(route = %pattern, "Route registered");
        }

        let state = AppState { store, routes };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let app = Router::new()
            .route("/", any(root_handler))
            .route("/{*path}", any(path_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_size));

        cors::apply(app)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` resolves, then drain in-flight
    /// requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

async fn root_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatch(&state, method, "/", &headers, body).await
}

async fn path_handler(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    dispatch(&state, method, &path, &headers, body).await
}

/// Resolve the route and run the matching handler.
async fn dispatch(
    state: &AppState,
    method: Method,
    path: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(headers);

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Dispatching request"
    );

    let (label, response) = match state.routes.resolve(&method, path) {
        Resolution::Matched { action, params } => {
            let response = execute(state.store.as_ref(), action, &params, &body)
                .await
                .unwrap_or_else(IntoResponse::into_response);
            (action.as_str(), response)
        }
        Resolution::MethodNotAllowed => (
            "none",
            (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response(),
        ),
        Resolution::InvalidParam(message) => {
            tracing::debug!(request_id = %request_id, path = %path, %message, "Bad path identifier");
            ("none", (StatusCode::BAD_REQUEST, message).into_response())
        }
        Resolution::NotFound => {
            tracing::debug!(request_id = %request_id, path = %path, "No route matched");
            ("none", (StatusCode::NOT_FOUND, "Not found").into_response())
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), label, start_time);
    response
}

async fn execute(
    store: &dyn VendorStore,
    action: Action,
    params: &PathParams,
    body: &Bytes,
) -> ServiceResult<Response> {
    // The route table guarantees every action's parameters are present.
    let vendor_id = || params.int("vendor_id").unwrap_or_default();
    let material_id = || params.int("material_id").unwrap_or_default();

    match action {
        Action::ServiceInfo => Ok(handlers::service_info()),
        Action::ListVendors => vendors::list(store).await,
        Action::CreateVendor => vendors::create(store, body).await,
        Action::GetVendor => vendors::get(store, vendor_id()).await,
        Action::UpdateVendor => vendors::update(store, vendor_id(), body).await,
        Action::DeleteVendor => vendors::delete(store, vendor_id()).await,
        Action::ListMaterials => materials::list(store).await,
        Action::CreateMaterial => materials::create(store, body).await,
        Action::ListVendorMaterials => materials::list_by_vendor(store, vendor_id()).await,
        Action::CreateVendorMaterial => {
            materials::create_for_vendor(store, vendor_id(), body).await
        }
        Action::UpdateMaterial => materials::update(store, material_id(), body).await,
        Action::DeleteMaterial => materials::delete(store, material_id()).await,
        Action::UpdateMaterialPrice => materials::update_price(store, body).await,
        Action::ComparePrices => {
            let name = params.text("material_name").unwrap_or_default();
            comparison::compare(store, name).await
        }
    }
}
