//! Prometheus Metrics Module
//!
//! Records every outbound call made to the backend API.
//!
//! # Metrics Collected
//! - API request counts by method, route template, and status
//! - API request latency histograms

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Status label used when no HTTP response was received.
pub const TRANSPORT_ERROR_STATUS: &str = "error";

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// API request counter by method, route template and status code
pub static API_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("api_requests_total", "Total number of backend API requests")
            .namespace("reset_portal"),
        &["method", "route", "status"],
    )
    .expect("Failed to create API_REQUESTS_TOTAL metric")
});

/// API request latency histogram in seconds
pub static API_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0];
    HistogramVec::new(
        HistogramOpts::new(
            "api_request_duration_seconds",
            "Backend API request latency in seconds",
        )
        .namespace("reset_portal")
        .buckets(buckets),
        &["method", "route"],
    )
    .expect("Failed to create API_REQUEST_DURATION_SECONDS metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(API_REQUESTS_TOTAL.clone()))
        .expect("Failed to register API_REQUESTS_TOTAL");
    registry
        .register(Box::new(API_REQUEST_DURATION_SECONDS.clone()))
        .expect("Failed to register API_REQUEST_DURATION_SECONDS");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Record one finished API call. `status` is `None` on transport failure.
pub fn record_api_request(method: &str, route: &str, status: Option<u16>, duration_secs: f64) {
    // Force registration before the first observation
    Lazy::force(&REGISTRY);

    let status = status
        .map(|s| s.to_string())
        .unwrap_or_else(|| TRANSPORT_ERROR_STATUS.to_string());
    API_REQUESTS_TOTAL
        .with_label_values(&[method, route, &status])
        .inc();
    API_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, route])
        .observe(duration_secs);
}
