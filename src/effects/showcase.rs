use crate::constants::{SHOWCASE_DELAY_MS, SHOW_CLASS};
use crate::dom;
use web_sys as web;

/// Reveal the hero showcase shortly after load, without waiting for scroll.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let Some(showcase) = document.query_selector(".pc-showcase").map_err(dom::js_err)? else {
        log::debug!("[showcase] no .pc-showcase element");
        return Ok(());
    };
    if showcase.class_list().contains(SHOW_CLASS) {
        return Ok(());
    }
    dom::set_timeout(SHOWCASE_DELAY_MS, move || {
        _ = showcase.class_list().add_1(SHOW_CLASS);
    })?;
    log::info!("[showcase] reveal scheduled");
    Ok(())
}
