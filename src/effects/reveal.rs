use crate::constants::{REVEAL_THRESHOLD, SHOW_CLASS};
use crate::dom;
use web_sys as web;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, ".reveal")?;
    if targets.is_empty() {
        log::debug!("[reveal] no .reveal elements");
        return Ok(());
    }
    dom::observe_visible(&targets, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1(SHOW_CLASS);
        true
    })?;
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
