use crate::core::{Theme, BG_PROPERTY};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let Some(button) = document.get_element_by_id("themeToggle") else {
        log::debug!("[theme] no #themeToggle button");
        return Ok(());
    };
    dom::add_listener(&button, "click", |_| {
        if let Err(e) = toggle() {
            log::error!("[theme] {:?}", e);
        }
    })?;
    log::info!("[theme] toggle wired");
    Ok(())
}

fn toggle() -> anyhow::Result<()> {
    let root = dom::window_document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    let style = root.style();
    let current = style.get_property_value(BG_PROPERTY).map_err(dom::js_err)?;
    let next = Theme::from_bg(&current).toggled();
    for (name, value) in next.properties() {
        style.set_property(name, value).map_err(dom::js_err)?;
    }
    log::debug!("[theme] now {:?}", next);
    Ok(())
}
