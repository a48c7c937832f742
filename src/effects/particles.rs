use crate::constants::PARTICLE_COUNT;
use crate::core::{parse_particle_count, ParticleField};
use crate::dom;
use crate::frame::{self, FrameContext};
use anyhow::{anyhow, Context};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = document
        .get_element_by_id("particles")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[particles] no #particles canvas");
        return Ok(());
    };

    let ctx = canvas
        .get_context("2d")
        .map_err(dom::js_err)
        .context("particles: getContext")?
        .ok_or_else(|| anyhow!("particles: 2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("particles: {:?}", e))?;

    let count = match canvas.get_attribute("data-count") {
        Some(raw) => parse_particle_count(&raw).unwrap_or_else(|e| {
            log::warn!("[particles] data-count ignored: {e}");
            PARTICLE_COUNT
        }),
        None => PARTICLE_COUNT,
    };

    let (w, h) = sync_canvas_size(window, &canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(count, w, h)));

    let canvas_resize = canvas.clone();
    let field_resize = field.clone();
    dom::add_listener(window, "resize", move |_| {
        if let Some(w) = web::window() {
            let (w, h) = sync_canvas_size(&w, &canvas_resize);
            field_resize.borrow_mut().resize(w, h);
        }
    })?;

    frame::start_loop(Rc::new(RefCell::new(FrameContext::new(ctx, field))));
    log::info!("[particles] {} particles on {}x{}", count, w, h);
    Ok(())
}

// Backing store tracks the viewport one-to-one.
fn sync_canvas_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = dom::viewport_size(window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w as f32, h as f32)
}
