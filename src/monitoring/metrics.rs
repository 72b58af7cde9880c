use once_cell::sync::Lazy;
use prometheus::{
    histogram_opts, Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

// Global Prometheus registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

// App info gauge (const)
pub static APP_INFO: Lazy<IntGauge> = Lazy::new(|| {
    let g = IntGauge::with_opts(
        Opts::new("app_info", "Application info gauge")
            .const_label("app", env!("CARGO_PKG_NAME"))
            .const_label("version", env!("CARGO_PKG_VERSION")),
    )
    .expect("valid app_info metric");
    REGISTRY.register(Box::new(g.clone())).ok();
    g.set(1);
    g
});

// Artifacts rendered, by artifact (model.yaml / manifest.json)
pub static RENDERS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("renders_total", "Total rendered artifacts"),
        &["artifact"],
    )
    .expect("valid renders_total metric");
    REGISTRY.register(Box::new(c.clone())).ok();
    c
});

// Form edits, by field name
pub static FIELD_UPDATES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("field_updates_total", "Total form field updates"),
        &["field"],
    )
    .expect("valid field_updates_total metric");
    REGISTRY.register(Box::new(c.clone())).ok();
    c
});

pub static REQUEST_LATENCY_MS: Lazy<HistogramVec> = Lazy::new(|| {
    let opts = histogram_opts!(
        "request_latency_ms",
        "HTTP request latency in milliseconds",
        vec![0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]
    );
    let hv = HistogramVec::new(opts, &["method", "route", "status_class"])
        .expect("valid request_latency_ms metric");
    REGISTRY.register(Box::new(hv.clone())).ok();
    hv
});

pub fn record_render(artifact: &str) {
    RENDERS_TOTAL.with_label_values(&[artifact]).inc();
}

pub fn record_field_update(field: &str) {
    FIELD_UPDATES_TOTAL.with_label_values(&[field]).inc();
}

// Export metrics in Prometheus text format
pub fn export_prometheus() -> String {
    Lazy::force(&APP_INFO);
    let metric_families = REGISTRY.gather();
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_ok() {
        String::from_utf8(buffer).unwrap_or_default()
    } else {
        "".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_contains_recorded_series() {
        record_render("model.yaml");
        record_field_update("temperature");

        let text = export_prometheus();
        assert!(text.contains("app_info"));
        assert!(text.contains("renders_total{artifact=\"model.yaml\"}"));
        assert!(text.contains("field_updates_total{field=\"temperature\"}"));
    }
}
