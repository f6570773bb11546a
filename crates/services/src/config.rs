use std::time::Duration;

use gram_core::model::SessionDefaults;

/// Width below which the sidebar becomes an overlay instead of a docked column.
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

/// Width of the rendering surface, used to pick sidebar behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        self.width < COMPACT_BREAKPOINT_PX
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280)
    }
}

/// Tunables for the demo flow. The defaults are the stock demo timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub login_latency: Duration,
    pub login_fade: Duration,
    pub logout_fade: Duration,
    pub toast_duration: Duration,
    pub badge_reward: u32,
    /// Window size at launch. The UI follows resizes from here.
    pub viewport: Viewport,
    pub defaults: SessionDefaults,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            login_latency: Duration::from_millis(1500),
            login_fade: Duration::from_millis(380),
            logout_fade: Duration::from_millis(350),
            toast_duration: Duration::from_millis(3000),
            badge_reward: 50,
            viewport: Viewport::default(),
            defaults: SessionDefaults::default(),
        }
    }
}

impl DemoConfig {
    #[must_use]
    pub fn with_login_latency(mut self, latency: Duration) -> Self {
        self.login_latency = latency;
        self
    }

    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    #[must_use]
    pub fn with_badge_reward(mut self, reward: u32) -> Self {
        self.badge_reward = reward;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: SessionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Zero every delay. Handy for tests that only care about end states.
    #[must_use]
    pub fn instant(mut self) -> Self {
        self.login_latency = Duration::ZERO;
        self.login_fade = Duration::ZERO;
        self.logout_fade = Duration::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_timings() {
        let config = DemoConfig::default();
        assert_eq!(config.login_latency, Duration::from_millis(1500));
        assert_eq!(config.toast_duration, Duration::from_secs(3));
        assert_eq!(config.badge_reward, 50);
        assert!(!config.viewport.is_compact());
    }

    #[test]
    fn compact_breakpoint_is_exclusive() {
        assert!(Viewport::new(767).is_compact());
        assert!(!Viewport::new(768).is_compact());
    }

    #[test]
    fn instant_clears_flow_delays_only() {
        let config = DemoConfig::default().instant();
        assert_eq!(config.login_latency, Duration::ZERO);
        assert_eq!(config.logout_fade, Duration::ZERO);
        assert_eq!(config.toast_duration, Duration::from_secs(3));
    }
}
