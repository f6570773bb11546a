use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_leaderboard;

#[component]
pub(super) fn LeaderboardPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let rows = map_leaderboard(&ctx.catalog().leaderboard);

    rsx! {
        section { class: "section active", id: "leaderboard",
            div { class: "leaderboard",
                for row in rows {
                    div { key: "{row.rank}", class: "{row.class}",
                        span { class: "lb-rank", "{row.medal}" }
                        span { class: "lb-name", "{row.name}" }
                        span { class: "lb-xp", "{row.xp}" }
                    }
                }
            }
        }
    }
}
