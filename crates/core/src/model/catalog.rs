use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{BadgeId, CourseId, SessionState};

const DEMO_CATALOG_JSON: &str = include_str!("../../data/demo_catalog.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("malformed catalogue: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("course {course} has progress {percent}% outside 0..=100")]
    ProgressOutOfRange { course: CourseId, percent: f64 },

    #[error("course {course} has {done} of {total} lessons done")]
    LessonCountMismatch { course: CourseId, done: u32, total: u32 },

    #[error("duplicate course id {0}")]
    DuplicateCourse(CourseId),

    #[error("duplicate badge id {0}")]
    DuplicateBadge(BadgeId),
}

/// Where a stat tile takes its number from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum StatSource {
    Xp,
    Streak,
    Fixed { value: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatTile {
    pub icon: String,
    pub label: String,
    #[serde(flatten)]
    pub source: StatSource,
}

impl StatTile {
    /// Current value of the stat, reading live session numbers where bound.
    #[must_use]
    pub fn resolve(&self, state: &SessionState) -> f64 {
        match self.source {
            StatSource::Xp => f64::from(state.xp()),
            StatSource::Streak => f64::from(state.streak()),
            StatSource::Fixed { value } => value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub icon: String,
    pub title: String,
    pub lessons_done: u32,
    pub lessons_total: u32,
    pub progress_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub xp: u32,
    #[serde(default)]
    pub is_you: bool,
}

/// Static demo content: overview stats, courses, badges and the class leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub stats: Vec<StatTile>,
    pub courses: Vec<Course>,
    pub badges: Vec<Badge>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Catalog {
    /// The catalogue bundled with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled document fails to parse or validate.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG_JSON)
    }

    /// Parse and validate a catalogue document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` for invalid JSON and the other variants
    /// for content that parses but is inconsistent.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id) {
                return Err(CatalogError::DuplicateCourse(course.id));
            }
            if !(0.0..=100.0).contains(&course.progress_percent) {
                return Err(CatalogError::ProgressOutOfRange {
                    course: course.id,
                    percent: course.progress_percent,
                });
            }
            if course.lessons_done > course.lessons_total {
                return Err(CatalogError::LessonCountMismatch {
                    course: course.id,
                    done: course.lessons_done,
                    total: course.lessons_total,
                });
            }
        }

        let mut badge_ids = HashSet::new();
        for badge in &self.badges {
            if !badge_ids.insert(badge.id) {
                return Err(CatalogError::DuplicateBadge(badge.id));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn badge(&self, id: BadgeId) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.id == id)
    }

    #[must_use]
    pub fn earned_badge_count(&self) -> usize {
        self.badges.iter().filter(|badge| badge.earned).count()
    }
}
