use std::sync::Arc;

use services::{AnalysisService, SessionService};

/// The services the views need, provided by the composition root.
pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionService>;
    fn analysis(&self) -> Arc<AnalysisService>;
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionService>,
    analysis: Arc<AnalysisService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            analysis: app.analysis(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn analysis(&self) -> Arc<AnalysisService> {
        Arc::clone(&self.analysis)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
