use std::sync::Arc;

use discern_export::styles::DocumentStyles;
use discern_inference::Engine;
use discern_session::SessionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub engine: Arc<Engine>,
    pub report_styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionStore>, engine: Engine) -> Self {
        Self {
            sessions,
            engine: Arc::new(engine),
            report_styles: Arc::new(DocumentStyles::default()),
        }
    }
}
