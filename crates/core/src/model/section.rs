use serde::{Deserialize, Serialize};

use crate::model::Portal;

/// Page title shown when the requested section does not exist.
pub const FALLBACK_TITLE: &str = "Dashboard";

/// Dashboard panels reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Overview,
    Progress,
    Badges,
    Courses,
    Leaderboard,
    Settings,
}

/// Extra animations replayed when a section becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionCue {
    Counters,
    ProgressBars,
    BadgePop,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Progress,
        Section::Badges,
        Section::Courses,
        Section::Leaderboard,
        Section::Settings,
    ];

    /// Resolve a section from its identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Progress => "progress",
            Section::Badges => "badges",
            Section::Courses => "courses",
            Section::Leaderboard => "leaderboard",
            Section::Settings => "settings",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Dashboard Overview",
            Section::Progress => "My Progress",
            Section::Badges => "Badges & Achievements",
            Section::Courses => "My Courses",
            Section::Leaderboard => "Class Leaderboard",
            Section::Settings => "Settings",
        }
    }

    /// Sidebar entry (icon, label). Educators see assignments in place of the leaderboard.
    #[must_use]
    pub fn nav_entry(self, portal: Portal) -> (&'static str, &'static str) {
        match (self, portal) {
            (Section::Overview, _) => ("🏠", "Overview"),
            (Section::Progress, _) => ("📈", "My Progress"),
            (Section::Badges, _) => ("🏅", "Badges"),
            (Section::Courses, _) => ("📖", "Courses"),
            (Section::Leaderboard, Portal::Learner) => ("🏆", "Leaderboard"),
            (Section::Leaderboard, Portal::Educator) => ("📋", "Assignments"),
            (Section::Settings, _) => ("⚙️", "Settings"),
        }
    }

    #[must_use]
    pub fn cues(self) -> &'static [SectionCue] {
        match self {
            Section::Overview => &[SectionCue::ProgressBars, SectionCue::Counters],
            Section::Badges => &[SectionCue::BadgePop],
            _ => &[],
        }
    }
}

/// Title for a raw section identifier, falling back to [`FALLBACK_TITLE`].
#[must_use]
pub fn page_title(id: &str) -> &'static str {
    Section::from_id(id).map_or(FALLBACK_TITLE, Section::title)
}
