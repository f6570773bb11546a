use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Standard,
    Dark,
}

/// Background variables swapped by the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_card: &'static str,
    pub bg_card2: &'static str,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Standard }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Theme::Standard => Palette {
                bg_primary: "#0f1923",
                bg_card: "#1a2635",
                bg_card2: "#1e2d3e",
            },
            Theme::Dark => Palette {
                bg_primary: "#060d14",
                bg_card: "#0f1923",
                bg_card2: "#131f2b",
            },
        }
    }
}

impl Palette {
    /// Inline style declaring the palette as CSS custom properties.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--bg-primary: {}; --bg-card: {}; --bg-card2: {};",
            self.bg_primary, self.bg_card, self.bg_card2
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Standard => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    raw: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme `{}` (expected light or dark)", self.raw)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "standard" | "default" => Ok(Theme::Standard),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError { raw: s.to_string() }),
        }
    }
}
