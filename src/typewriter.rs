use crate::dom;
use folio_core::constants::TYPEWRITER_START_DELAY;
use folio_core::{Selectors, Typewriter};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub fn init(document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let Some(title) = dom::query_opt(document, sel.hero_title) else {
        log::debug!("[typewriter] no {}; skipping", sel.hero_title);
        return Ok(());
    };
    start(title, Typewriter::with_default_phrases());
    Ok(())
}

/// Drive `typewriter` on `title` forever, starting after the initial delay.
pub fn start(title: web::HtmlElement, typewriter: Typewriter) {
    schedule(title, Rc::new(RefCell::new(typewriter)), TYPEWRITER_START_DELAY);
}

fn schedule(title: web::HtmlElement, typewriter: Rc<RefCell<Typewriter>>, delay: Duration) {
    dom::set_timeout(delay, move || {
        let next = {
            let mut tw = typewriter.borrow_mut();
            let next = tw.step();
            title.set_text_content(Some(tw.text()));
            next
        };
        schedule(title, typewriter, next);
    });
}
