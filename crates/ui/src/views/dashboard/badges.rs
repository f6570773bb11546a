use dioxus::prelude::*;
use gram_core::model::BadgeId;
use services::{SessionService, ToastTone};

use crate::context::AppContext;
use crate::store::{UiState, use_ui_state};
use crate::vm::map_badges;

/// Pay the reward for an earned badge and announce it. Locked badges do nothing.
pub(crate) fn award_badge(ui: UiState, service: &SessionService, badge_id: BadgeId) {
    let Some(_total) = ui.update_session(|state| service.award_badge(state, badge_id)) else {
        return;
    };
    ui.pop_badge(badge_id);
    let reward = service.config().badge_reward;
    ui.show_toast(
        format!("🏅 Badge unlocked! +{reward} XP"),
        ToastTone::Success,
        service.config().toast_duration,
    );
}

#[component]
pub(super) fn BadgesPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let cards = map_badges(&ctx.catalog().badges, (ui.badges_epoch)(), (ui.badge_pop)());
    let earned = ctx.catalog().earned_badge_count();
    let total = cards.len();

    rsx! {
        section { class: "section active", id: "badges",
            p { class: "section-note", "{earned} of {total} badges earned. Tap an earned badge for bonus XP!" }
            div { class: "badge-grid",
                for card in cards {
                    button {
                        key: "{card.key}",
                        r#type: "button",
                        class: "{card.class}",
                        style: "{card.style}",
                        disabled: !card.earned,
                        onclick: {
                            let service = ctx.session();
                            let badge_id = card.id;
                            move |_| award_badge(ui, &service, badge_id)
                        },
                        div { class: "badge-icon", "{card.icon}" }
                        div { class: "badge-name", "{card.name}" }
                        div { class: "badge-desc", "{card.description}" }
                        if !card.earned {
                            div { class: "badge-lock", "🔒 Locked" }
                        }
                    }
                }
            }
        }
    }
}
