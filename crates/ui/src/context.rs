use std::sync::Arc;

use gram_core::model::Catalog;
use services::{DemoConfig, SessionService};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionService>;
    fn catalog(&self) -> Arc<Catalog>;
    fn config(&self) -> DemoConfig;

    /// Fixed seed for the particle background; `None` scatters randomly.
    fn particle_seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionService>,
    catalog: Arc<Catalog>,
    config: DemoConfig,
    particle_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            catalog: app.catalog(),
            config: app.config(),
            particle_seed: app.particle_seed(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn config(&self) -> DemoConfig {
        self.config
    }

    #[must_use]
    pub fn particle_seed(&self) -> Option<u64> {
        self.particle_seed
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
