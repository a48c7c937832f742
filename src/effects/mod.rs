//! DOM wiring for each page effect. Every `wire` returns `Ok(())` without
//! doing anything when its element is missing from the page.

pub mod avatar;
pub mod particles;
pub mod reveal;
pub mod showcase;
pub mod skills;
pub mod theme;
pub mod typed;

use crate::constants::SHOW_CLASS;
use crate::core::{PageScan, Wiring};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record which effect hooks exist in `document`.
pub fn scan(document: &web::Document) -> anyhow::Result<PageScan> {
    let showcase = document
        .query_selector(".pc-showcase")
        .map_err(dom::js_err)?
        .map(|el| el.class_list().contains(SHOW_CLASS));
    Ok(PageScan {
        particles_canvas: document
            .get_element_by_id("particles")
            .is_some_and(|el| el.dyn_ref::<web::HtmlCanvasElement>().is_some()),
        reveal_count: dom::query_all(document, ".reveal")?.len(),
        typed: document.get_element_by_id("typed").is_some(),
        skillbar_count: dom::query_all(document, ".skillbar")?.len(),
        theme_toggle: document.get_element_by_id("themeToggle").is_some(),
        avatar: document
            .get_element_by_id("avatar")
            .is_some_and(|el| el.dyn_ref::<web::HtmlElement>().is_some()),
        showcase,
    })
}

pub fn wire(wiring: Wiring, window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    match wiring {
        Wiring::ParticleLoop => particles::wire(window, document),
        Wiring::RevealObserver => reveal::wire(document),
        Wiring::TypingTimer => typed::wire(document),
        Wiring::SkillObserver => skills::wire(document),
        Wiring::ThemeClick => theme::wire(document),
        Wiring::AvatarPointer => avatar::wire(document),
        Wiring::ShowcaseTimer => showcase::wire(document),
    }
}
