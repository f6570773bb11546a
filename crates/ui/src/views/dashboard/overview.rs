use dioxus::prelude::*;
use gram_core::anim::{PROGRESS_BAR_DELAY, XP_BAR_DELAY};
use gram_core::model::XP_PER_LEVEL;

use crate::components::{AnimatedCounter, ProgressBar};
use crate::context::AppContext;
use crate::store::use_ui_state;
use crate::vm::{badge_key, map_courses, map_stat_tiles, welcome_headline};

use super::award_badge;

#[component]
pub(super) fn OverviewPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let catalog = ctx.catalog();

    let session = ui.session.read().clone();
    let headline = welcome_headline((ui.welcome)(), session.username());
    let subtitle = session.portal().copy().welcome_subtitle;
    let level = session.level();
    let level_xp = session.xp() % XP_PER_LEVEL;
    let level_percent = session.level_progress_percent();
    let tiles = map_stat_tiles(&catalog, &session);
    let courses = map_courses(&catalog.courses);
    let pop = (ui.badge_pop)();
    let chips: Vec<_> = catalog
        .badges
        .iter()
        .filter(|badge| badge.earned)
        .map(|badge| {
            let popping = pop.is_some_and(|pop| pop.id == badge.id);
            (badge_key(0, badge.id, pop), popping, badge.clone())
        })
        .collect();

    rsx! {
        section { class: "section active", id: "overview",
            div { class: "welcome-banner",
                h2 { id: "welcomeMsg", "{headline}" }
                p { id: "welcomeSub", "{subtitle}" }
                div { class: "xp-level",
                    span { "Level {level}" }
                    span { class: "xp-level-count", "{level_xp} / {XP_PER_LEVEL} XP" }
                }
                ProgressBar {
                    key: "{level_percent}",
                    percent: level_percent,
                    delay: XP_BAR_DELAY,
                    fill_class: "xp-fill",
                }
            }
            div { class: "stats-grid",
                for tile in tiles {
                    div { key: "{tile.label}", class: "stat-card",
                        div { class: "stat-icon", "{tile.icon}" }
                        AnimatedCounter { target: tile.value }
                        div { class: "stat-label", "{tile.label}" }
                    }
                }
            }
            div { class: "panel",
                h3 { "📖 Continue Learning" }
                for course in courses {
                    div { key: "{course.key}", class: "course-row",
                        span { class: "course-icon", "{course.icon}" }
                        div { class: "course-body",
                            div { class: "course-title", "{course.title}" }
                            ProgressBar {
                                percent: course.percent,
                                delay: PROGRESS_BAR_DELAY,
                                fill_class: "course-fill",
                            }
                        }
                        span { class: "course-percent", "{course.percent:.0}%" }
                    }
                }
            }
            div { class: "panel",
                h3 { "🏅 Recent Badges" }
                div { class: "badge-chips",
                    for (key, popping, badge) in chips {
                        button {
                            key: "{key}",
                            r#type: "button",
                            class: if popping {
                                "badge-chip earned popping"
                            } else {
                                "badge-chip earned"
                            },
                            title: "{badge.description}",
                            onclick: {
                                let service = ctx.session();
                                let badge_id = badge.id;
                                move |_| award_badge(ui, &service, badge_id)
                            },
                            "{badge.icon} {badge.name}"
                        }
                    }
                }
            }
        }
    }
}
