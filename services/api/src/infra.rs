use metrics_exporter_prometheus::PrometheusHandle;
use rainwise::assessment::{ComplexityPreference, FeasibilityAssessor, SiteContext};
use rainwise::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) assessor: Arc<FeasibilityAssessor>,
}

pub(crate) fn parse_complexity(raw: &str) -> Result<ComplexityPreference, String> {
    raw.parse::<ComplexityPreference>()
        .map_err(|err| err.to_string())
}

/// Reads a JSON site description (a plain attribute map) from disk.
pub(crate) fn load_site(path: &Path) -> Result<SiteContext, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
