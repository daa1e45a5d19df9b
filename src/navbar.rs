use crate::dom;
use folio_core::constants::ACTIVE_CLASS;
use folio_core::{MenuState, NavbarStyle, Selectors};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub struct NavbarParts {
    pub navbar: web::HtmlElement,
    pub menu_toggle: web::HtmlElement,
    pub nav_links: web::HtmlElement,
    pub anchors: Vec<web::HtmlElement>,
}

pub fn init(window: &web::Window, document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let parts = NavbarParts {
        navbar: dom::query(document, sel.navbar)?,
        menu_toggle: dom::query(document, sel.menu_toggle)?,
        nav_links: dom::query(document, sel.nav_links)?,
        anchors: dom::query_all(document, sel.nav_link_anchors),
    };
    wire(window, parts);
    Ok(())
}

pub fn wire(window: &web::Window, parts: NavbarParts) {
    let NavbarParts {
        navbar,
        menu_toggle,
        nav_links,
        anchors,
    } = parts;

    let menu = Rc::new(Cell::new(MenuState::default()));

    {
        let (menu, toggle, links) = (menu.clone(), menu_toggle.clone(), nav_links.clone());
        dom::add_listener(&menu_toggle, "click", move |_| {
            menu.set(menu.get().toggled());
            show_menu(&toggle, &links, menu.get());
        });
    }

    for anchor in &anchors {
        let (menu, toggle, links) = (menu.clone(), menu_toggle.clone(), nav_links.clone());
        dom::add_listener(anchor, "click", move |_| {
            menu.set(menu.get().closed());
            show_menu(&toggle, &links, menu.get());
        });
    }

    let wnd = window.clone();
    dom::add_listener(window, "scroll", move |_| {
        let scroll_y = wnd.scroll_y().unwrap_or(0.0);
        dom::apply_styles(&navbar, NavbarStyle::for_scroll(scroll_y).properties());
    });
    log::info!("[navbar] wired {} nav links", anchors.len());
}

fn show_menu(toggle: &web::HtmlElement, links: &web::HtmlElement, menu: MenuState) {
    _ = toggle.class_list().toggle_with_force(ACTIVE_CLASS, menu.open);
    _ = links.class_list().toggle_with_force(ACTIVE_CLASS, menu.open);
}
