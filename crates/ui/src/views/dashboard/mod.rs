mod badges;
mod courses;
mod leaderboard;
mod overview;
mod progress;
mod settings;
mod sidebar;

use dioxus::prelude::*;
use gram_core::anim::format_grouped;
use gram_core::model::Section;

use crate::context::AppContext;
use crate::store::{DashboardPhase, use_ui_state};

use badges::BadgesPanel;
use courses::CoursesPanel;
use leaderboard::LeaderboardPanel;
use overview::OverviewPanel;
use progress::ProgressPanel;
use settings::SettingsPanel;
use sidebar::Sidebar;

pub(crate) use badges::award_badge;
#[cfg(test)]
pub(crate) use sidebar::start_logout;

#[component]
pub fn DashboardView() -> Element {
    let ui = use_ui_state();
    let leaving = (ui.dashboard_phase)() == DashboardPhase::Leaving;
    let expanded = !ui.session.read().sidebar_open();
    let active = ui.nav.read().active();

    let page_class = if leaving { "dashboard-page leaving" } else { "dashboard-page" };
    let main_class = if expanded { "main-content expanded" } else { "main-content" };

    rsx! {
        div { class: "{page_class}",
            Sidebar {}
            main { class: "{main_class}",
                Topbar {}
                match active {
                    Some(Section::Overview) => rsx! { OverviewPanel {} },
                    Some(Section::Progress) => rsx! { ProgressPanel {} },
                    Some(Section::Badges) => rsx! { BadgesPanel {} },
                    Some(Section::Courses) => rsx! { CoursesPanel {} },
                    Some(Section::Leaderboard) => rsx! { LeaderboardPanel {} },
                    Some(Section::Settings) => rsx! { SettingsPanel {} },
                    None => rsx! {},
                }
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let title = ui.nav.read().title();
    let (xp, streak) = {
        let session = ui.session.read();
        (format_grouped(u64::from(session.xp())), session.streak())
    };

    let service = ctx.session();
    let on_toggle = move |_| {
        let mut nav = ui.nav;
        let viewport = (ui.viewport)();
        let layout =
            ui.update_session(|state| service.toggle_sidebar(state, &mut nav.write(), viewport));
        tracing::debug!(?layout, "sidebar toggled");
    };

    rsx! {
        header { class: "topbar",
            button { class: "menu-toggle", r#type: "button", onclick: on_toggle, "☰" }
            h2 { class: "page-title", "{title}" }
            div { class: "topbar-chips",
                span { class: "chip xp-chip", "⭐ " span { id: "xpCount", "{xp}" } " XP" }
                span { class: "chip streak-chip", "🔥 " span { id: "streakCount", "{streak}" } " days" }
            }
        }
    }
}
