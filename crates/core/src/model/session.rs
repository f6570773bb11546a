use serde::{Deserialize, Serialize};

use crate::model::{Portal, Theme};

/// Experience points needed per level; the XP bar shows progress within the current level.
pub const XP_PER_LEVEL: u32 = 1000;

/// Values a fresh session starts from (and returns to on logout).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefaults {
    pub portal: Portal,
    pub xp: u32,
    pub streak: u32,
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            portal: Portal::Learner,
            xp: 1250,
            streak: 5,
            dark_mode: false,
            sidebar_open: true,
        }
    }
}

/// The single mutable record behind the demo.
///
/// XP and streak only ever grow while a session lasts; the only way back down
/// is [`SessionState::reset`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    portal: Portal,
    username: String,
    xp: u32,
    streak: u32,
    dark_mode: bool,
    sidebar_open: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self {
            portal: defaults.portal,
            username: String::new(),
            xp: defaults.xp,
            streak: defaults.streak,
            dark_mode: defaults.dark_mode,
            sidebar_open: defaults.sidebar_open,
        }
    }

    #[must_use]
    pub fn portal(&self) -> Portal {
        self.portal
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn set_portal(&mut self, portal: Portal) {
        self.portal = portal;
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Add experience points. Saturates instead of wrapping.
    pub fn award_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        self.xp
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// Throw the session away and start over from `defaults`.
    pub fn reset(&mut self, defaults: &SessionDefaults) {
        *self = Self::new(defaults);
    }

    /// Fill percentage (0-100) of the XP bar within the current level.
    #[must_use]
    pub fn level_progress_percent(&self) -> f64 {
        f64::from(self.xp % XP_PER_LEVEL) / 10.0
    }

    /// Level number, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.xp / XP_PER_LEVEL + 1
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&SessionDefaults::default())
    }
}

/// Time-of-day salutation for the dashboard welcome line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 17 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}
