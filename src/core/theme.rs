use crate::constants::{DARK_BG, DARK_MUTED, LIGHT_BG, LIGHT_MUTED};

pub const BG_PROPERTY: &str = "--bg";
pub const MUTED_PROPERTY: &str = "--muted";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Classify the current inline `--bg` value. Unset or unknown is dark,
    /// which is what the stylesheet ships with.
    pub fn from_bg(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "#fff" | "#ffffff" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// `(property, value)` pairs to write on the document element.
    pub fn properties(self) -> [(&'static str, &'static str); 2] {
        match self {
            Theme::Dark => [(BG_PROPERTY, DARK_BG), (MUTED_PROPERTY, DARK_MUTED)],
            Theme::Light => [(BG_PROPERTY, LIGHT_BG), (MUTED_PROPERTY, LIGHT_MUTED)],
        }
    }
}
