use crate::constants::{NAV_ACTIVE_ATTR, NAV_ATTR, NAV_SELECTOR, SECTION_CHANGE_EVENT};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Mark the nav indicator for `active` and clear the others.
pub fn mark_active(document: &web::Document, active: &str) {
    for el in dom::query_all(document, NAV_SELECTOR) {
        let is_active = el.get_attribute(NAV_ATTR).as_deref() == Some(active);
        _ = el.set_attribute(NAV_ACTIVE_ATTR, if is_active { "true" } else { "false" });
    }
}

/// Let page code outside wasm react to section changes.
pub fn dispatch_change(document: &web::Document, active: &str) {
    let init = web::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(active));
    match web::CustomEvent::new_with_event_init_dict(SECTION_CHANGE_EVENT, &init) {
        Ok(ev) => {
            _ = document.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[nav] could not create {}: {:?}", SECTION_CHANGE_EVENT, e),
    }
}
