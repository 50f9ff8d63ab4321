use std::sync::Arc;

use tokio::sync::Mutex;

use crate::builder::ResumeBuilder;
use crate::config::Config;
use crate::export::DocumentExporter;
use crate::notify::ToastQueue;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Requests are applied one at a time.
    pub builder: Arc<Mutex<ResumeBuilder>>,
    /// Drained by the UI independently of the builder lock.
    pub toasts: Arc<ToastQueue>,
}

impl AppState {
    pub fn new(config: &Config, exporter: Arc<dyn DocumentExporter>) -> Self {
        let toasts = Arc::new(ToastQueue::new(config.toast_capacity));
        let builder = ResumeBuilder::new(
            config.id_scheme.generator(),
            exporter,
            toasts.clone(),
            config.export_margin_in,
        );

        Self {
            builder: Arc::new(Mutex::new(builder)),
            toasts,
        }
    }
}
