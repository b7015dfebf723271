//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tracker_requests_total` (counter): requests by method, route, status
//! - `tracker_request_duration_seconds` (histogram): latency distribution
//! - `tracker_projects_created_total` (counter): create operations
//!
//! # Design Decisions
//! - Recording is decoupled from exposition: handlers always record, and
//!   the values go nowhere unless the Prometheus exporter is installed

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Must run inside the tokio runtime; the exporter serves scrapes from a
/// background task.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "tracker_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!(
        "tracker_request_duration_seconds",
        "route" => route.to_string(),
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a successful project creation.
pub fn record_project_created(chain: &str) {
    counter!("tracker_projects_created_total", "chain" => chain.to_string()).increment(1);
}
