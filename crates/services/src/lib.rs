#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod particles;
pub mod session_service;
pub mod toast;

pub use gram_core::Clock;

pub use app_services::AppServices;
pub use auth::{AuthGateway, Profile, SimulatedAuth};
pub use config::{DemoConfig, Viewport};
pub use error::{AppServicesError, AuthError, SessionError};
pub use navigation::{NavOutcome, NavigationState, SidebarLayout};
pub use particles::{PARTICLE_COUNT, Particle, particle_field, scatter_particles};
pub use session_service::{SessionService, SettingsOutcome};
pub use toast::{Toast, ToastQueue, ToastTone};
