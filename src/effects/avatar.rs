use crate::core::{Rect, Tilt};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let Some(avatar) = document
        .get_element_by_id("avatar")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[avatar] no #avatar element");
        return Ok(());
    };

    let target = avatar.clone();
    dom::add_listener(&avatar, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let r = target.get_bounding_client_rect();
        let rect = Rect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        };
        let tilt = Tilt::from_pointer(ev.client_x() as f32, ev.client_y() as f32, rect);
        apply(&target, tilt);
    })?;

    let target = avatar.clone();
    dom::add_listener(&avatar, "mouseleave", move |_| apply(&target, Tilt::NEUTRAL))?;

    log::info!("[avatar] tilt wired");
    Ok(())
}

#[inline]
fn apply(el: &web::HtmlElement, tilt: Tilt) {
    _ = el.style().set_property("transform", &tilt.css_transform());
}
