mod dashboard_vm;
mod login_vm;

pub use dashboard_vm::{
    BadgeCardVm, CourseRowVm, LeaderboardRowVm, NavItemVm, SidebarVm, StatTileVm, badge_key, map_badges,
    map_courses, map_leaderboard, map_nav_items, map_stat_tiles, sidebar_vm, welcome_headline,
};
pub use login_vm::{LoginCardVm, login_card_vm};
