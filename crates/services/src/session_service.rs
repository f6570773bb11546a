use std::sync::Arc;

use gram_core::model::{
    BadgeId, Catalog, Greeting, LoginDraft, Portal, PortalCopy, SessionState, Theme,
};

use crate::auth::{AuthGateway, Profile};
use crate::config::{DemoConfig, Viewport};
use crate::error::SessionError;
use crate::navigation::{NavigationState, SidebarLayout};
use crate::Clock;

pub const EMPTY_FIELDS_TOAST: &str = "⚠️ Please fill in all fields!";
pub const SETTINGS_SAVED_TOAST: &str = "✅ Settings saved successfully!";
pub const SIGN_IN_FAILED_TOAST: &str = "⚠️ Could not sign in. Please try again.";

/// What a settings save changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOutcome {
    /// New display name, if one was supplied.
    pub renamed: Option<String>,
    pub toast: &'static str,
}

/// Handlers behind every interactive element of the portal.
///
/// The service never owns the session record. Callers hand in the state they
/// own and the service applies one interaction to it.
#[derive(Clone)]
pub struct SessionService {
    clock: Clock,
    config: DemoConfig,
    auth: Arc<dyn AuthGateway>,
    catalog: Arc<Catalog>,
}

impl SessionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        config: DemoConfig,
        auth: Arc<dyn AuthGateway>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            clock,
            config,
            auth,
            catalog,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A fresh session built from the configured defaults.
    #[must_use]
    pub fn initial_state(&self) -> SessionState {
        SessionState::new(&self.config.defaults)
    }

    /// Switch the login card between learner and educator.
    pub fn switch_portal(&self, state: &mut SessionState, portal: Portal) -> &'static PortalCopy {
        if state.portal() != portal {
            tracing::info!(%portal, "portal switched");
        }
        state.set_portal(portal);
        portal.copy()
    }

    /// Validate the form and wait for the gateway.
    ///
    /// Nothing is written to the session here; the caller applies the returned
    /// profile with [`SessionService::complete_sign_in`] once it is ready to
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Login` for blank fields and `SessionError::Auth`
    /// if the gateway refuses.
    pub async fn sign_in(&self, portal: Portal, draft: &LoginDraft) -> Result<Profile, SessionError> {
        let credentials = match draft.validate() {
            Ok(credentials) => credentials,
            Err(err) => {
                tracing::warn!(%portal, error = %err, "login rejected by form validation");
                return Err(err.into());
            }
        };

        tracing::info!(username = credentials.username(), %portal, "login submitted");
        let profile = self.auth.sign_in(&credentials, portal).await?;
        tracing::info!(username = %profile.display_name, "login succeeded");
        Ok(profile)
    }

    pub fn complete_sign_in(&self, state: &mut SessionState, profile: &Profile) {
        state.set_portal(profile.portal);
        state.set_username(profile.display_name.clone());
    }

    #[must_use]
    pub fn welcome_toast(profile: &Profile) -> String {
        format!("🎉 Welcome, {}! Ready to learn?", profile.display_name)
    }

    #[must_use]
    pub fn greeting(&self) -> Greeting {
        Greeting::from_hour(self.clock.hour())
    }

    /// End the session: state back to defaults, form cleared, overview selected.
    pub fn logout(&self, state: &mut SessionState, form: &mut LoginDraft, nav: &mut NavigationState) {
        tracing::info!(username = state.username(), "logout");
        state.reset(&self.config.defaults);
        form.clear();
        nav.reset();
    }

    /// Apply the settings form. A blank name leaves the current one in place.
    pub fn save_settings(&self, state: &mut SessionState, display_name: &str) -> SettingsOutcome {
        let name = display_name.trim();
        let renamed = if name.is_empty() {
            None
        } else {
            state.set_username(name);
            Some(name.to_string())
        };
        tracing::info!(renamed = renamed.is_some(), "settings saved");
        SettingsOutcome {
            renamed,
            toast: SETTINGS_SAVED_TOAST,
        }
    }

    /// Reward a click on a badge. Only earned badges pay out; returns the new XP total.
    pub fn award_badge(&self, state: &mut SessionState, badge_id: BadgeId) -> Option<u32> {
        let badge = self.catalog.badge(badge_id)?;
        if !badge.earned {
            return None;
        }
        let total = state.award_xp(self.config.badge_reward);
        tracing::info!(badge = %badge.name, reward = self.config.badge_reward, total, "badge reward");
        Some(total)
    }

    pub fn toggle_theme(&self, state: &mut SessionState) -> Theme {
        let theme = Theme::from_dark_mode(state.toggle_dark_mode());
        tracing::debug!(%theme, "theme toggled");
        theme
    }

    /// Compact viewports slide the overlay in and out; wide ones collapse the column.
    pub fn toggle_sidebar(
        &self,
        state: &mut SessionState,
        nav: &mut NavigationState,
        viewport: Viewport,
    ) -> SidebarLayout {
        if viewport.is_compact() {
            SidebarLayout::Overlay {
                open: nav.toggle_overlay(),
            }
        } else {
            SidebarLayout::Docked {
                open: state.toggle_sidebar(),
            }
        }
    }
}
