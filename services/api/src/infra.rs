use employability::scoring::EmployabilityCalculator;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, read-only scorer handed to the scoring handlers.
pub(crate) type SharedCalculator = Arc<EmployabilityCalculator>;
