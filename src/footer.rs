use crate::dom;
use folio_core::constants::COPYRIGHT_PLACEHOLDER_YEAR;
use folio_core::{stamp_year, Selectors};
use web_sys as web;

pub fn init(document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let footer = dom::query(document, sel.footer_copyright)?;
    let year = js_sys::Date::new_0().get_full_year();
    stamp(&footer, year);
    Ok(())
}

pub fn stamp(footer: &web::HtmlElement, year: u32) {
    let text = footer.text_content().unwrap_or_default();
    footer.set_text_content(Some(&stamp_year(&text, COPYRIGHT_PLACEHOLDER_YEAR, year)));
}
