use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gram_core::model::{BadgeId, Greeting, LoginDraft, SectionCue, SessionState};
use services::{NavigationState, ToastQueue, ToastTone, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    Submitting,
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPhase {
    Active,
    Leaving,
}

/// Which headline the overview banner shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeLine {
    Greeting(Greeting),
    Returning,
}

/// Last badge clicked for a reward; `generation` changes on every click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgePop {
    pub id: BadgeId,
    pub generation: u32,
}

/// Every piece of reactive state shared by the login page and the dashboard.
#[derive(Clone, Copy)]
pub struct UiState {
    pub session: Signal<SessionState>,
    pub login_form: Signal<LoginDraft>,
    pub password_visible: Signal<bool>,
    pub login_phase: Signal<LoginPhase>,
    pub dashboard_phase: Signal<DashboardPhase>,
    pub nav: Signal<NavigationState>,
    pub toast: Signal<ToastQueue>,
    pub welcome: Signal<WelcomeLine>,
    /// Live window size.
    pub viewport: Signal<Viewport>,
    pub badge_pop: Signal<Option<BadgePop>>,
    /// Bumped to restart the stat counters.
    pub counters_epoch: Signal<u32>,
    /// Bumped to re-run progress bar fills.
    pub bars_epoch: Signal<u32>,
    /// Bumped to replay the badge pop-in.
    pub badges_epoch: Signal<u32>,
}

impl UiState {
    #[must_use]
    pub fn new(initial: SessionState, greeting: Greeting, viewport: Viewport) -> Self {
        Self {
            session: Signal::new(initial),
            login_form: Signal::new(LoginDraft::default()),
            password_visible: Signal::new(false),
            login_phase: Signal::new(LoginPhase::Idle),
            dashboard_phase: Signal::new(DashboardPhase::Active),
            nav: Signal::new(NavigationState::default()),
            toast: Signal::new(ToastQueue::new()),
            welcome: Signal::new(WelcomeLine::Greeting(greeting)),
            viewport: Signal::new(viewport),
            badge_pop: Signal::new(None),
            counters_epoch: Signal::new(0),
            bars_epoch: Signal::new(0),
            badges_epoch: Signal::new(0),
        }
    }

    pub fn update_session<R>(self, apply: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut session = self.session;
        let mut guard = session.write();
        apply(&mut *guard)
    }

    /// Put `message` on screen and hide it after `duration` unless a newer
    /// toast has replaced it by then.
    pub fn show_toast(self, message: impl Into<String>, tone: ToastTone, duration: Duration) {
        let mut toast = self.toast;
        let generation = toast.write().show(message, tone);
        spawn_forever(async move {
            tokio::time::sleep(duration).await;
            toast.write().dismiss(generation);
        });
    }

    /// Follow the window to a new width, dropping the overlay once it is wide.
    pub fn resize(self, viewport: Viewport) {
        let mut current = self.viewport;
        if *current.peek() == viewport {
            return;
        }
        current.set(viewport);
        let mut nav = self.nav;
        if !viewport.is_compact() && nav.peek().overlay_open() {
            nav.write().resize(viewport);
        }
    }

    /// Replay the pop animation on the badge that was just clicked.
    pub fn pop_badge(self, id: BadgeId) {
        let mut badge_pop = self.badge_pop;
        let previous = *badge_pop.peek();
        let generation = previous.map_or(1, |pop| pop.generation.wrapping_add(1));
        badge_pop.set(Some(BadgePop { id, generation }));
    }

    /// Restart the entrance animations named by `cues`.
    pub fn replay(self, cues: &[SectionCue]) {
        for cue in cues {
            let mut epoch = match cue {
                SectionCue::Counters => self.counters_epoch,
                SectionCue::ProgressBars => self.bars_epoch,
                SectionCue::BadgePop => self.badges_epoch,
            };
            *epoch.write() += 1;
        }
    }
}

pub fn provide_ui_state(initial: SessionState, greeting: Greeting, viewport: Viewport) -> UiState {
    use_context_provider(|| UiState::new(initial, greeting, viewport))
}

#[must_use]
pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}
