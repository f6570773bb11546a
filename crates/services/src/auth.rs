use std::time::Duration;

use async_trait::async_trait;
use gram_core::model::{Credentials, Portal};
use gram_core::time::whole_millis;

use crate::error::AuthError;

/// Who signed in, as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub portal: Portal,
}

/// Boundary to whatever verifies credentials.
///
/// The demo has no backend; `SimulatedAuth` only waits. A real deployment
/// plugs its network client in here.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials, portal: Portal)
    -> Result<Profile, AuthError>;
}

/// Accepts any credentials after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuth {
    latency: Duration,
}

impl SimulatedAuth {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl AuthGateway for SimulatedAuth {
    async fn sign_in(
        &self,
        credentials: &Credentials,
        portal: Portal,
    ) -> Result<Profile, AuthError> {
        tracing::debug!(latency_ms = whole_millis(self.latency), "simulating sign-in latency");
        tokio::time::sleep(self.latency).await;
        Ok(Profile {
            display_name: credentials.username().to_string(),
            portal,
        })
    }
}
