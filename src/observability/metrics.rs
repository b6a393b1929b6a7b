//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vendor_service_requests_total` (counter): requests by method, status, action
//! - `vendor_service_request_duration_seconds` (histogram): latency by method, action

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, action: &'static str, start: Instant) {
    metrics::counter!(
        "vendor_service_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "action" => action
    )
    .increment(1);

    metrics::histogram!(
        "vendor_service_request_duration_seconds",
        "method" => method.to_string(),
        "action" => action
    )
    .record(start.elapsed().as_secs_f64());
}
