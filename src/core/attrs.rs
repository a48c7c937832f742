//! Parsing for the `data-*` attributes a page can use to tune the effects.

use crate::constants::PARTICLE_COUNT_MAX;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttrError {
    #[error("attribute is empty")]
    Empty,
    #[error("invalid CSS length {0:?}")]
    InvalidLength(String),
    #[error("invalid particle count {0:?} (expected 1..={max})", max = PARTICLE_COUNT_MAX)]
    InvalidCount(String),
}

// Longer units first so "vmin" is not read as "in" and "rem" not as "em".
const LENGTH_UNITS: [&str; 15] = [
    "vmin", "vmax", "rem", "px", "em", "ex", "ch", "vw", "vh", "pt", "pc", "cm", "mm", "in", "%",
];

// Computed values are left for the browser to resolve.
const LENGTH_FUNCTIONS: [&str; 5] = ["calc(", "min(", "max(", "clamp(", "var("];

/// Validate a skill bar `data-width` and return it trimmed.
pub fn parse_css_width(raw: &str) -> Result<String, AttrError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AttrError::Empty);
    }
    let invalid = || AttrError::InvalidLength(raw.to_string());

    if LENGTH_FUNCTIONS.iter().any(|f| value.starts_with(f)) {
        return if value.ends_with(')') {
            Ok(value.to_string())
        } else {
            Err(invalid())
        };
    }

    let (number, unit) = LENGTH_UNITS
        .iter()
        .find_map(|u| value.strip_suffix(u).map(|n| (n, *u)))
        .unwrap_or((value, ""));
    let n: f64 = number.parse().map_err(|_| invalid())?;
    if !n.is_finite() || n < 0.0 || number.starts_with(['+', '-']) {
        return Err(invalid());
    }
    if unit.is_empty() && n != 0.0 {
        return Err(invalid());
    }
    Ok(value.to_string())
}

/// Split a `data-words` override on `|`, dropping blank entries.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_particle_count(raw: &str) -> Result<usize, AttrError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AttrError::Empty);
    }
    match value.parse::<usize>() {
        Ok(n) if (1..=PARTICLE_COUNT_MAX).contains(&n) => Ok(n),
        _ => Err(AttrError::InvalidCount(raw.to_string())),
    }
}
