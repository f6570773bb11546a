//! Shared error types for the services crate.

use thiserror::Error;

use gram_core::model::{CatalogError, LoginError};

/// Errors emitted by an `AuthGateway`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("sign-in service unavailable: {0}")]
    Unavailable(String),
    #[error("credentials were rejected")]
    Rejected,
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl SessionError {
    /// True when the form itself was incomplete (as opposed to a gateway failure).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Login(_))
    }
}
