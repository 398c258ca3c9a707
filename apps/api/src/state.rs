use std::sync::Arc;

use crate::config::Config;
use crate::export::{DocumentExporter, PdfExporter};
use crate::layout::PageGeometry;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page every arrangement is laid out on; also the export page width.
    pub page: PageGeometry,
    pub sessions: SessionStore,
    /// Pluggable export backend. Default: `PdfExporter`, whose fonts load on first export.
    pub exporter: Arc<dyn DocumentExporter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let page = PageGeometry::new(config.page_format);
        let exporter = Arc::new(PdfExporter::new(
            page,
            config.export_scale,
            config.export_pagination,
            config.font_dir.clone(),
        ));
        AppState {
            config,
            page,
            sessions: SessionStore::default(),
            exporter,
        }
    }
}
