use crate::constants::HOVER_TARGET_SELECTOR;
use crate::dom::{self, EventListener};
use crate::overlay;
use backdrop_core::{CursorVariant, SharedPointer};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub tracker: SharedPointer,
    pub cursor: Option<web::HtmlElement>,
}

/// Listeners owned by the pointer subsystem; dropping this detaches them.
pub struct PointerListeners {
    listeners: Vec<EventListener>,
}

impl PointerListeners {
    pub fn detach(&self) {
        for l in &self.listeners {
            l.detach();
        }
    }
}

pub fn wire_pointer_handlers(
    document: &web::Document,
    w: PointerWiring,
) -> anyhow::Result<PointerListeners> {
    let mut listeners = vec![wire_pointermove(&w)?];
    let targets = dom::query_all(document, HOVER_TARGET_SELECTOR);
    for el in &targets {
        listeners.extend(wire_hover(el, &w)?);
    }
    log::info!("[pointer] tracking {} hover targets", targets.len());
    Ok(PointerListeners { listeners })
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    EventListener::attach(&window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = w
            .tracker
            .on_move(ev.client_x() as f32, ev.client_y() as f32);
        if let Some(cursor) = &w.cursor {
            overlay::move_to(cursor, pos);
        }
    })
}

fn wire_hover(el: &web::Element, w: &PointerWiring) -> anyhow::Result<[EventListener; 2]> {
    let tracker_enter = w.tracker.clone();
    let enter = EventListener::attach(el, "mouseenter", move |_ev| {
        tracker_enter.set_variant(CursorVariant::Hover);
    })?;

    let tracker_leave = w.tracker.clone();
    let leave = EventListener::attach(el, "mouseleave", move |_ev| {
        tracker_leave.set_variant(CursorVariant::Default);
    })?;
    Ok([enter, leave])
}
