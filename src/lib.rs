#![cfg(target_arch = "wasm32")]
use folio_core::constants::REVEAL_CLASS;
use folio_core::{reveal_stylesheet, waits_for_dom, Selectors};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod contact;
mod dom;
mod footer;
mod hover;
mod navbar;
mod particles;
mod reveal;
mod skills;
mod theme;
mod typewriter;
mod watch;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if let Err(e) = dom::append_style(&document, &reveal_stylesheet(REVEAL_CLASS)) {
        log::error!("reveal stylesheet: {:?}", e);
    }

    if waits_for_dom(&document.ready_state()) {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_| init(&doc));
    } else {
        init(&document);
    }
    Ok(())
}

/// Run every initializer once. A failing initializer is logged and skipped;
/// the rest still run.
fn init(document: &web::Document) {
    let Some(window) = web::window() else {
        log::error!("init error: no window");
        return;
    };
    let sel = Selectors::default();

    run("navbar", || navbar::init(&window, document, &sel));
    run("particles", || particles::init(&window, document, &sel));
    run("skills", || skills::init(document, &sel));
    run("contact", || contact::init(document, &sel.contact));
    run("reveal", || reveal::init(document, &sel));
    run("theme", theme::init);
    run("hover", || hover::init(document, &sel));
    run("typewriter", || typewriter::init(document, &sel));
    run("footer", || footer::init(document, &sel));
}

fn run(name: &str, f: impl FnOnce() -> anyhow::Result<()>) {
    if let Err(e) = f() {
        log::error!("[{}] init error: {:?}", name, e);
    }
}
