use gram_core::model::{Section, SectionCue, page_title};

use crate::config::Viewport;

/// Which dashboard panel is showing and what the header says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    active: Option<Section>,
    title: &'static str,
    overlay_open: bool,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavOutcome {
    pub section: Option<Section>,
    pub cues: &'static [SectionCue],
}

/// How the sidebar ended up after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarLayout {
    /// Compact viewport: the sidebar slides over the content.
    Overlay { open: bool },
    /// Wide viewport: the sidebar is a column that can collapse.
    Docked { open: bool },
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Some(Section::Overview),
            title: Section::Overview.title(),
            overlay_open: false,
        }
    }
}

impl NavigationState {
    #[must_use]
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    /// Show the panel for `id` and hide every other one.
    ///
    /// Unknown identifiers hide all panels and show the fallback title.
    pub fn navigate(&mut self, id: &str, viewport: Viewport) -> NavOutcome {
        let section = Section::from_id(id);
        self.active = section;
        self.title = page_title(id);
        if viewport.is_compact() {
            self.overlay_open = false;
        }
        tracing::debug!(section = id, known = section.is_some(), "navigate");
        NavOutcome {
            section,
            cues: section.map(Section::cues).unwrap_or_default(),
        }
    }

    /// Follow a window resize. Widening past the breakpoint drops the overlay
    /// so the docked column takes over again. Returns true if it was closed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.is_compact() || !self.overlay_open {
            return false;
        }
        self.overlay_open = false;
        tracing::debug!(width = viewport.width(), "overlay dropped on widen");
        true
    }

    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay_open = !self.overlay_open;
        self.overlay_open
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
