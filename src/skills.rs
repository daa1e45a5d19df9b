use crate::dom;
use crate::watch;
use folio_core::constants::SKILL_BAR_THRESHOLD;
use folio_core::{skill_width, Selectors};
use web_sys as web;

pub fn init(document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let bars = dom::query_all(document, sel.skill_bars);
    log::info!("[skills] watching {} bars", bars.len());
    wire(bars, sel.skill_width_attr)
}

/// Grow each bar to its target width the first time it is half visible.
pub fn wire(bars: Vec<web::HtmlElement>, width_attr: &'static str) -> anyhow::Result<()> {
    watch::watch_once(bars, SKILL_BAR_THRESHOLD, move |bar| {
        let raw = bar.get_attribute(width_attr).unwrap_or_default();
        match skill_width(&raw) {
            Some(width) => {
                _ = bar.style().set_property("width", &width);
            }
            None => log::warn!("[skills] unusable {}={:?}", width_attr, raw),
        }
    })
}
