mod catalog;
mod ids;
mod login;
mod portal;
mod section;
mod session;
mod theme;

pub use catalog::{Badge, Catalog, CatalogError, Course, LeaderboardEntry, StatSource, StatTile};
pub use ids::{BadgeId, CourseId, ParseIdError};
pub use login::{Credentials, LoginDraft, LoginError};
pub use portal::{ParsePortalError, Portal, PortalCopy};
pub use section::{FALLBACK_TITLE, Section, SectionCue, page_title};
pub use session::{Greeting, SessionDefaults, SessionState, XP_PER_LEVEL};
pub use theme::{Palette, ParseThemeError, Theme};
