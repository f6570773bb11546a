use gram_core::anim::{badge_delay, format_grouped};
use gram_core::model::{
    Badge, BadgeId, Catalog, Course, LeaderboardEntry, Portal, Section, SessionState,
};

use crate::store::{BadgePop, WelcomeLine};

#[derive(Clone, Debug, PartialEq)]
pub struct StatTileVm {
    pub icon: String,
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub section: Section,
    pub icon: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarVm {
    pub avatar: &'static str,
    pub name: String,
    pub role: &'static str,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseRowVm {
    pub key: String,
    pub icon: String,
    pub title: String,
    pub lessons: String,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeCardVm {
    pub key: String,
    pub id: BadgeId,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub earned: bool,
    pub class: &'static str,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: u32,
    pub medal: String,
    pub name: String,
    pub xp: String,
    pub class: &'static str,
}

/// Banner headline for the overview.
#[must_use]
pub fn welcome_headline(line: WelcomeLine, name: &str) -> String {
    match line {
        WelcomeLine::Greeting(greeting) => format!("{}, {name}! 🎉", greeting.label()),
        WelcomeLine::Returning => format!("Welcome back, {name}! 🎉"),
    }
}

#[must_use]
pub fn sidebar_vm(
    state: &SessionState,
    compact: bool,
    overlay_open: bool,
) -> SidebarVm {
    let copy = state.portal().copy();
    let class = match (compact, overlay_open, state.sidebar_open()) {
        (true, true, _) => "sidebar open",
        (true, false, _) => "sidebar",
        (false, _, true) => "sidebar",
        (false, _, false) => "sidebar closed",
    };
    SidebarVm {
        avatar: copy.avatar,
        name: state.username().to_string(),
        role: copy.role_label,
        class: class.to_string(),
    }
}

#[must_use]
pub fn map_nav_items(portal: Portal, active: Option<Section>) -> Vec<NavItemVm> {
    Section::ALL
        .into_iter()
        .map(|section| {
            let (icon, label) = section.nav_entry(portal);
            NavItemVm {
                section,
                icon,
                label,
                active: active == Some(section),
            }
        })
        .collect()
}

#[must_use]
pub fn map_stat_tiles(catalog: &Catalog, state: &SessionState) -> Vec<StatTileVm> {
    catalog
        .stats
        .iter()
        .map(|tile| StatTileVm {
            icon: tile.icon.clone(),
            label: tile.label.clone(),
            value: tile.resolve(state),
        })
        .collect()
}

#[must_use]
pub fn map_courses(courses: &[Course]) -> Vec<CourseRowVm> {
    courses
        .iter()
        .map(|course| CourseRowVm {
            key: course.id.to_string(),
            icon: course.icon.clone(),
            title: course.title.clone(),
            lessons: format!("{}/{} lessons", course.lessons_done, course.lessons_total),
            percent: course.progress_percent,
        })
        .collect()
}

/// Badge cards keyed on `epoch` so a bump remounts them and replays the pop-in.
/// The card named by `pop` gets its own key and pops again without delay.
#[must_use]
pub fn map_badges(badges: &[Badge], epoch: u32, pop: Option<BadgePop>) -> Vec<BadgeCardVm> {
    badges
        .iter()
        .enumerate()
        .map(|(index, badge)| {
            let popped = pop.filter(|pop| pop.id == badge.id);
            let delay = if popped.is_some() {
                0
            } else {
                badge_delay(index).as_millis()
            };
            BadgeCardVm {
                key: badge_key(epoch, badge.id, popped),
                id: badge.id,
                icon: badge.icon.clone(),
                name: badge.name.clone(),
                description: badge.description.clone(),
                earned: badge.earned,
                class: if badge.earned {
                    "big-badge earned"
                } else {
                    "big-badge locked"
                },
                style: format!("animation-delay: {delay}ms;"),
            }
        })
        .collect()
}

/// Element key for a badge; a new pop generation forces a remount.
#[must_use]
pub fn badge_key(epoch: u32, id: BadgeId, pop: Option<BadgePop>) -> String {
    match pop.filter(|pop| pop.id == id) {
        Some(pop) => format!("{epoch}-{id}-{}", pop.generation),
        None => format!("{epoch}-{id}"),
    }
}

#[must_use]
pub fn map_leaderboard(entries: &[LeaderboardEntry]) -> Vec<LeaderboardRowVm> {
    entries
        .iter()
        .map(|entry| LeaderboardRowVm {
            rank: entry.rank,
            medal: match entry.rank {
                1 => "🥇".to_string(),
                2 => "🥈".to_string(),
                3 => "🥉".to_string(),
                rank => format!("#{rank}"),
            },
            name: entry.name.clone(),
            xp: format!("{} XP", format_grouped(u64::from(entry.xp))),
            class: if entry.is_you { "lb-row you" } else { "lb-row" },
        })
        .collect()
}
