//! Which effects a page needs, decided from what was found in the document.
//!
//! The DOM layer fills in a `PageScan`; `plan` turns it into the list of
//! listeners, timers, observers and loops to install. Anything missing from
//! the page contributes nothing.

/// What the document offers each effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageScan {
    pub particles_canvas: bool,
    pub reveal_count: usize,
    pub typed: bool,
    pub skillbar_count: usize,
    pub theme_toggle: bool,
    pub avatar: bool,
    /// `Some(already_shown)` when a `.pc-showcase` element exists.
    pub showcase: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wiring {
    ParticleLoop,
    RevealObserver,
    TypingTimer,
    SkillObserver,
    ThemeClick,
    AvatarPointer,
    ShowcaseTimer,
}

impl Wiring {
    pub fn name(self) -> &'static str {
        match self {
            Wiring::ParticleLoop => "particles",
            Wiring::RevealObserver => "reveal",
            Wiring::TypingTimer => "typed",
            Wiring::SkillObserver => "skills",
            Wiring::ThemeClick => "theme",
            Wiring::AvatarPointer => "avatar",
            Wiring::ShowcaseTimer => "showcase",
        }
    }
}

pub fn plan(scan: &PageScan) -> Vec<Wiring> {
    let wanted = [
        (scan.particles_canvas, Wiring::ParticleLoop),
        (scan.reveal_count > 0, Wiring::RevealObserver),
        (scan.typed, Wiring::TypingTimer),
        (scan.skillbar_count > 0, Wiring::SkillObserver),
        (scan.theme_toggle, Wiring::ThemeClick),
        (scan.avatar, Wiring::AvatarPointer),
        (scan.showcase == Some(false), Wiring::ShowcaseTimer),
    ];
    wanted
        .into_iter()
        .filter_map(|(present, w)| present.then_some(w))
        .collect()
}
