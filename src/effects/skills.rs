use crate::constants::SKILLBAR_THRESHOLD;
use crate::core::parse_css_width;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let bars = dom::query_all(document, ".skillbar")?;
    if bars.is_empty() {
        log::debug!("[skills] no .skillbar elements");
        return Ok(());
    }
    dom::observe_visible(&bars, SKILLBAR_THRESHOLD, fill_bar)?;
    log::info!("[skills] observing {} bars", bars.len());
    Ok(())
}

/// Apply the fill width of the bar's `<i>` child. Returns whether the bar is
/// done and can stop being observed.
fn fill_bar(bar: &web::Element) -> bool {
    let Some(fill) = bar
        .query_selector("i")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return false;
    };
    let Some(raw) = fill.get_attribute("data-width") else {
        return false;
    };
    match parse_css_width(&raw) {
        Ok(width) => {
            if let Err(e) = fill.style().set_property("width", &width) {
                log::warn!("[skills] set width failed: {:?}", e);
                return false;
            }
            true
        }
        Err(e) => {
            log::warn!("[skills] {e}");
            true
        }
    }
}
