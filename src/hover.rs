use crate::dom;
use folio_core::{CardElevation, Selectors};
use web_sys as web;

pub fn init(document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let cards = dom::query_all(document, sel.project_cards);
    wire(&cards);
    log::info!("[hover] wired {} project cards", cards.len());
    Ok(())
}

pub fn wire(cards: &[web::HtmlElement]) {
    for card in cards {
        let raised = card.clone();
        dom::add_listener(card, "mouseenter", move |_| {
            dom::apply_styles(&raised, CardElevation::Raised.properties());
        });
        let resting = card.clone();
        dom::add_listener(card, "mouseleave", move |_| {
            dom::apply_styles(&resting, CardElevation::Resting.properties());
        });
    }
}
