use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use gram_core::anim::COUNTER_DURATION;
use gram_core::model::{BadgeId, LoginDraft, Portal};
use services::{DemoConfig, Viewport};

use super::ViewError;
use super::dashboard::{award_badge, start_logout};
use super::login::submit_login;
use super::test_harness::{
    HarnessSeed, ViewKind, setup_view_harness, setup_view_harness_with_config,
};
use crate::store::{DashboardPhase, LoginPhase};

const SETTLED_XP: &str = "<span class=\"stat-val\">1,250</span>";

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_learner_copy() {
    let mut harness = setup_view_harness(ViewKind::Login, HarnessSeed::default());
    harness.rebuild();
    let html = harness.render();
    for expected in ["Student Login", "Welcome back, learner!", "Enter your Roll No. / Username"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("type=\"password\""), "password should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_educator_copy() {
    let seed = HarnessSeed {
        portal: Portal::Educator,
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Login, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Teacher Login"), "missing title in {html}");
    assert!(html.contains("Enter your Employee ID"), "missing placeholder in {html}");
    assert!(!html.contains("Student Login"), "learner title leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_welcome_and_xp() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, HarnessSeed::default());
    harness.rebuild();
    let html = harness.render();
    for expected in ["Good Morning, Asha!", "Dashboard Overview", "1,250", "Student", "Level 2"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert_eq!(html.matches("class=\"section active\"").count(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn dashboard_counter_settles_on_target() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, HarnessSeed::default());
    harness.rebuild();
    assert!(!harness.render().contains(SETTLED_XP), "counter skipped its count-up");

    harness.drive_for(COUNTER_DURATION + Duration::from_millis(200)).await;

    let html = harness.render();
    assert!(html.contains(SETTLED_XP), "counter never settled in {html}");
    assert!(!html.contains("1,251"), "counter overshot in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn badge_reward_moves_settled_counter_without_restart() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, HarnessSeed::default());
    harness.rebuild();
    harness.drive_for(COUNTER_DURATION + Duration::from_millis(200)).await;
    assert!(harness.render().contains(SETTLED_XP));

    harness.act(|h| award_badge(h.ui, &h.service, BadgeId::new(1)));
    harness.drive_for(Duration::from_millis(100)).await;

    let html = harness.render();
    assert!(html.contains("<span class=\"stat-val\">1,300</span>"), "missing new XP in {html}");
    assert!(!html.contains("<span class=\"stat-val\">0</span>"), "counter restarted in {html}");
    assert!(html.contains("badge-chip earned popping"), "chip did not pop in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn educator_dashboard_relabels_leaderboard() {
    let seed = HarnessSeed {
        portal: Portal::Educator,
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Dashboard, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Assignments"), "missing assignments entry in {html}");
    assert!(!html.contains("Leaderboard<"), "learner label leaked into {html}");
    assert!(html.contains("Teacher"), "missing role in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn badges_section_staggers_and_locks() {
    let seed = HarnessSeed {
        section: "badges",
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Dashboard, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("animation-delay: 70ms;"), "missing stagger in {html}");
    assert!(html.contains("Locked"), "missing locked badge in {html}");
    assert!(html.contains("4 of 6 badges earned"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_section_prefills_display_name() {
    let seed = HarnessSeed {
        section: "settings",
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Dashboard, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Display name"), "missing field in {html}");
    assert!(html.contains("value=\"Asha\""), "missing name in {html}");
    assert!(!html.contains("id=\"overview\""), "overview should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_section_hides_every_panel() {
    let seed = HarnessSeed {
        section: "homework",
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Dashboard, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(">Dashboard<"), "missing fallback title in {html}");
    assert!(!html.contains("class=\"section active\""), "a panel is visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn clicked_badge_pops_without_stagger() {
    let seed = HarnessSeed {
        section: "badges",
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Dashboard, seed);
    harness.rebuild();
    assert!(harness.render().contains("animation-delay: 140ms;"));

    harness.act(|h| award_badge(h.ui, &h.service, BadgeId::new(3)));

    let html = harness.render();
    assert!(!html.contains("animation-delay: 140ms;"), "clicked badge kept its stagger in {html}");
    assert!(html.contains("animation-delay: 70ms;"), "other badges lost their stagger in {html}");
    assert!(html.contains("Badge unlocked! +50 XP"), "missing reward toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn widening_window_closes_sidebar_overlay() {
    let config = DemoConfig::default()
        .instant()
        .with_viewport(Viewport::new(500));
    let mut harness = setup_view_harness_with_config(ViewKind::Dashboard, HarnessSeed::default(), config);
    harness.rebuild();

    harness.act(|h| {
        let mut nav = h.ui.nav;
        let viewport = *h.ui.viewport.peek();
        h.ui.update_session(|state| h.service.toggle_sidebar(state, &mut nav.write(), viewport));
    });
    assert!(harness.render().contains("sidebar open"), "overlay did not open");

    harness.act(|h| h.ui.resize(Viewport::new(1024)));

    let html = harness.render();
    assert!(!html.contains("sidebar open"), "overlay survived the resize in {html}");
    assert!(!harness.read(|h| h.ui.nav.peek().overlay_open()));
    assert_eq!(harness.read(|h| *h.ui.viewport.peek()), Viewport::new(1024));
}

#[tokio::test(flavor = "current_thread")]
async fn blank_login_warns_and_stays_put() {
    let mut harness = setup_view_harness(ViewKind::Login, HarnessSeed::default());
    harness.rebuild();

    harness.act(|h| {
        let mut view = h.view;
        submit_login(h.ui, Arc::clone(&h.service), move || view.set(ViewKind::Dashboard));
    });

    let html = harness.render();
    assert!(html.contains(ViewError::EmptyFields.message()), "missing warning in {html}");
    assert!(html.contains("toast show"), "toast hidden in {html}");
    assert!(html.contains("Student Login"), "left the login page: {html}");
    assert_eq!(harness.read(|h| *h.ui.login_phase.peek()), LoginPhase::Idle);
    assert!(harness.read(|h| *h.view.peek() == ViewKind::Login));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn filled_login_hands_over_after_latency_and_fade() {
    let mut harness = setup_view_harness_with_config(
        ViewKind::Login,
        HarnessSeed::default(),
        DemoConfig::default(),
    );
    harness.rebuild();

    harness.act(|h| {
        let mut form = h.ui.login_form;
        *form.write() = LoginDraft::new("Ravi", "secret");
        let mut view = h.view;
        submit_login(h.ui, Arc::clone(&h.service), move || view.set(ViewKind::Dashboard));
    });
    assert!(harness.render().contains("Signing in..."), "button not busy");
    assert_eq!(harness.read(|h| *h.ui.login_phase.peek()), LoginPhase::Submitting);

    harness.drive_for(Duration::from_millis(1000)).await;
    assert!(harness.read(|h| *h.view.peek() == ViewKind::Login), "handed over before the latency");

    harness.drive_for(Duration::from_millis(1000)).await;
    let html = harness.render();
    assert!(html.contains("Good Morning, Ravi! 🎉"), "missing greeting in {html}");
    assert!(html.contains("Welcome, Ravi! Ready to learn?"), "missing welcome toast in {html}");
    assert!(!html.contains("login-card"), "login card still shown in {html}");
    assert_eq!(harness.read(|h| *h.ui.login_phase.peek()), LoginPhase::Idle);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn logout_returns_to_cleared_learner_login() {
    let seed = HarnessSeed {
        portal: Portal::Educator,
        section: "settings",
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Dashboard, seed);
    harness.rebuild();

    harness.act(|h| {
        let mut form = h.ui.login_form;
        *form.write() = LoginDraft::new("Asha", "secret");
        let mut view = h.view;
        start_logout(h.ui, Arc::clone(&h.service), move || view.set(ViewKind::Login));
    });
    assert_eq!(harness.read(|h| *h.ui.dashboard_phase.peek()), DashboardPhase::Leaving);

    harness.drive_for(Duration::from_millis(100)).await;

    let html = harness.render();
    assert!(html.contains("Student Login"), "portal not reset in {html}");
    assert!(!html.contains("Teacher Login"), "educator copy leaked into {html}");
    assert!(harness.read(|h| *h.view.peek() == ViewKind::Login));
    assert!(harness.read(|h| h.ui.login_form.peek().username.is_empty()));
    assert_eq!(harness.read(|h| *h.ui.dashboard_phase.peek()), DashboardPhase::Active);
}
