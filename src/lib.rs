pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::{dom, effects};
    use anyhow::Context;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("portfolio-fx starting");

        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        if document.ready_state() == "loading" {
            dom::add_listener(&document, "DOMContentLoaded", |_| run_init())
                .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        } else {
            run_init();
        }
        Ok(())
    }

    fn run_init() {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let scan = effects::scan(&document)?;
        let wirings = crate::core::plan(&scan);
        log::debug!("page scan {:?} -> {} effects", scan, wirings.len());

        // Effects are independent; one failing must not stop the rest.
        for wiring in wirings {
            if let Err(e) = effects::wire(wiring, &window, &document)
                .with_context(|| format!("{} effect", wiring.name()))
            {
                log::error!("{:?}", e);
            }
        }
        Ok(())
    }
}
