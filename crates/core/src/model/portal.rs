use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of user the portal is presenting itself to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    #[default]
    Learner,
    Educator,
}

/// Copy and iconography that depend on the active portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortalCopy {
    pub avatar: &'static str,
    pub card_title: &'static str,
    pub card_subtitle: &'static str,
    pub username_placeholder: &'static str,
    pub role_label: &'static str,
    pub welcome_subtitle: &'static str,
}

const LEARNER_COPY: PortalCopy = PortalCopy {
    avatar: "🎒",
    card_title: "Student Login",
    card_subtitle: "Welcome back, learner!",
    username_placeholder: "Enter your Roll No. / Username",
    role_label: "Student",
    welcome_subtitle: "Keep up your amazing learning streak!",
};

const EDUCATOR_COPY: PortalCopy = PortalCopy {
    avatar: "📚",
    card_title: "Teacher Login",
    card_subtitle: "Welcome back, Guru Ji! 🙏",
    username_placeholder: "Enter your Employee ID",
    role_label: "Teacher",
    welcome_subtitle: "Your students are waiting. Let's teach great things!",
};

impl Portal {
    pub const ALL: [Portal; 2] = [Portal::Learner, Portal::Educator];

    #[must_use]
    pub fn copy(self) -> &'static PortalCopy {
        match self {
            Portal::Learner => &LEARNER_COPY,
            Portal::Educator => &EDUCATOR_COPY,
        }
    }

    /// Body class applied while the educator portal is active.
    #[must_use]
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Portal::Learner => None,
            Portal::Educator => Some("teacher-mode"),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Portal::Learner => "learner",
            Portal::Educator => "educator",
        }
    }

    /// Label on the portal switcher buttons.
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            Portal::Learner => "🎒 Student",
            Portal::Educator => "📚 Teacher",
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePortalError {
    raw: String,
}

impl fmt::Display for ParsePortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown portal `{}` (expected learner or educator)", self.raw)
    }
}

impl std::error::Error for ParsePortalError {}

impl FromStr for Portal {
    type Err = ParsePortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "learner" | "student" => Ok(Portal::Learner),
            "educator" | "teacher" => Ok(Portal::Educator),
            _ => Err(ParsePortalError { raw: s.to_string() }),
        }
    }
}
