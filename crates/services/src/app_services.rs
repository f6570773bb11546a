use std::sync::Arc;

use gram_core::model::Catalog;

use crate::auth::{AuthGateway, SimulatedAuth};
use crate::config::DemoConfig;
use crate::error::AppServicesError;
use crate::session_service::SessionService;
use crate::Clock;

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    config: DemoConfig,
    catalog: Arc<Catalog>,
    session: Arc<SessionService>,
}

impl AppServices {
    /// Build services with the bundled catalogue and simulated sign-in.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalogue is invalid.
    pub fn demo(config: DemoConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let auth = Arc::new(SimulatedAuth::new(config.login_latency));
        Self::with_auth(config, clock, auth)
    }

    /// Build services around a custom sign-in gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalogue is invalid.
    pub fn with_auth(
        config: DemoConfig,
        clock: Clock,
        auth: Arc<dyn AuthGateway>,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::demo()?);
        tracing::debug!(
            courses = catalog.courses.len(),
            badges = catalog.badges.len(),
            "catalogue loaded"
        );
        let session = Arc::new(SessionService::new(
            clock,
            config,
            auth,
            Arc::clone(&catalog),
        ));
        Ok(Self {
            config,
            catalog,
            session,
        })
    }

    #[must_use]
    pub fn config(&self) -> DemoConfig {
        self.config
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }
}
