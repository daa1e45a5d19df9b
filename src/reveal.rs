use crate::dom;
use crate::watch;
use folio_core::constants::{REVEAL_CLASS, REVEAL_THRESHOLD};
use folio_core::Selectors;
use web_sys as web;

pub fn init(document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let targets = dom::query_all(document, sel.reveal_targets);
    log::info!("[reveal] watching {} blocks", targets.len());
    wire(targets)
}

pub fn wire(targets: Vec<web::HtmlElement>) -> anyhow::Result<()> {
    watch::watch_once(targets, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1(REVEAL_CLASS);
    })
}
