use crate::constants::DEFAULT_WORDS;
use crate::core::{parse_word_list, Typewriter};
use crate::dom;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id("typed") else {
        log::debug!("[typed] no #typed element");
        return Ok(());
    };

    let words = el
        .get_attribute("data-words")
        .map(|raw| parse_word_list(&raw))
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| DEFAULT_WORDS.iter().map(|w| w.to_string()).collect());
    let Some(typewriter) = Typewriter::new(&words) else {
        return Ok(());
    };

    log::info!("[typed] cycling {} words", words.len());
    spawn_local(run(el, typewriter));
    Ok(())
}

async fn run(el: web::Element, mut typewriter: Typewriter) {
    loop {
        let step = typewriter.tick();
        el.set_text_content(Some(&step.text));
        if let Err(e) = dom::sleep_ms(step.delay_ms).await {
            log::error!("[typed] timer failed, stopping: {:?}", e);
            return;
        }
    }
}
