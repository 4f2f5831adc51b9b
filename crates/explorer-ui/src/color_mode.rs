use serde::{Deserialize, Serialize};

/// Settings key holding the chosen color mode
pub const COLOR_MODE_SETTING: &str = "color_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Effective mode: the stored choice, else the system preference
    pub fn resolve(stored: Option<ColorMode>, prefers_dark: bool) -> Self {
        stored.unwrap_or_else(|| Self::from_preference(prefers_dark))
    }

    /// Next mode after a toggle. With nothing stored, flips the system preference.
    pub fn toggle(current: Option<ColorMode>, prefers_dark: bool) -> Self {
        match Self::resolve(current, prefers_dark) {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("Unknown color mode: {}", s)),
        }
    }
}
