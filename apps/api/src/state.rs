use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::charts::TrendChartBuilder;
use crate::matching::RoleMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after seeding.
    pub catalog: Arc<dyn CatalogStore>,
    pub matcher: RoleMatcher,
    pub charts: TrendChartBuilder,
}

impl AppState {
    /// Wires the matcher and chart builder to one shared catalog handle.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            matcher: RoleMatcher::new(catalog.clone()),
            charts: TrendChartBuilder::new(catalog.clone()),
            catalog,
        }
    }
}
