//! Viewport intersection watcher: fires a callback the first time each
//! element becomes visible, then stops observing it.

use folio_core::OnceWatcher;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntriesCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

pub fn watch_once(
    targets: Vec<web::HtmlElement>,
    threshold: f64,
    mut on_visible: impl FnMut(&web::HtmlElement) + 'static,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let watcher = Rc::new(RefCell::new(OnceWatcher::new()));

    let pending = watcher.clone();
    let on_entries = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            let Ok(target) = entry.target().dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let fired = pending.borrow_mut().notify(&target, entry.is_intersecting());
            if let Some(el) = fired {
                observer.unobserve(&el);
                on_visible(&el);
            }
        }
    };
    let callback = Closure::wrap(Box::new(on_entries) as Box<EntriesCallback>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let mut w = watcher.borrow_mut();
    for target in targets {
        observer.observe(&target);
        w.register(target);
    }
    Ok(())
}
