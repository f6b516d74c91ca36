#![cfg(target_arch = "wasm32")]
use backdrop_core::{
    ParticleField, PointerTracker, SectionTracker, SharedPointer, SharedSections, SurfaceSize,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod overlay;
mod render;
mod resize;

use constants::{CANVAS_ID, SECTION_ATTR, SECTION_SELECTOR};

/// Everything attached to the page by `mount`.
struct Backdrop {
    animation: Option<frame::AnimationLoop>,
    resize: Option<resize::ResizeAdapter>,
    pointer: Option<events::PointerListeners>,
    sections: Option<events::SectionObserver>,
    section_tracker: Option<SharedSections>,
}

impl Backdrop {
    /// Loop first, then the resize listener, then the trackers; state drops last.
    fn teardown(self) {
        if let Some(a) = &self.animation {
            a.cancel();
        }
        if let Some(r) = &self.resize {
            r.detach();
        }
        if let Some(p) = &self.pointer {
            p.detach();
        }
        if let Some(s) = &self.sections {
            s.disconnect();
        }
        log::info!("backdrop torn down");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");
    mount();
    Ok(())
}

/// Attach the backdrop to the current document. No-op when already mounted.
#[wasm_bindgen]
pub fn mount() {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return;
    }
    match build() {
        Ok(b) => MOUNTED.with(|m| *m.borrow_mut() = Some(b)),
        Err(e) => log::error!("mount error: {:?}", e),
    }
}

/// Detach everything `mount` attached. Safe to call repeatedly.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(b) = MOUNTED.with(|m| m.borrow_mut().take()) {
        b.teardown();
    }
}

/// Id of the currently active section, if section tracking is running.
#[wasm_bindgen]
pub fn active_section() -> Option<String> {
    MOUNTED.with(|m| {
        m.borrow()
            .as_ref()
            .and_then(|b| b.section_tracker.as_ref())
            .map(SharedSections::active)
    })
}

fn build() -> anyhow::Result<Backdrop> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let cfg = match &canvas {
        Some(c) => config::from_attributes(|name| c.get_attribute(name)),
        None => config::BackdropConfig::default(),
    };

    let (animation, resize) = match &canvas {
        Some(canvas) => {
            let (a, r) = build_field(canvas, &cfg)?;
            (Some(a), Some(r))
        }
        None => {
            log::warn!("missing #{}; particle field disabled", CANVAS_ID);
            (None, None)
        }
    };

    let pointer = match build_pointer(&document) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("pointer tracking disabled: {:?}", e);
            None
        }
    };

    let (sections, section_tracker) = match build_sections(&document, cfg.section_threshold) {
        Ok(Some((obs, tracker))) => (Some(obs), Some(tracker)),
        Ok(None) => (None, None),
        Err(e) => {
            log::warn!("section tracking disabled: {:?}", e);
            (None, None)
        }
    };

    Ok(Backdrop {
        animation,
        resize,
        pointer,
        sections,
        section_tracker,
    })
}

fn build_field(
    canvas: &web::HtmlCanvasElement,
    cfg: &config::BackdropConfig,
) -> anyhow::Result<(frame::AnimationLoop, resize::ResizeAdapter)> {
    let size = dom::sync_canvas_to_window(canvas).unwrap_or_else(|| {
        SurfaceSize::from_pixels(canvas.width(), canvas.height())
    });
    let field = Rc::new(RefCell::new(ParticleField::new(
        cfg.field.clone(),
        size,
        &mut rand::thread_rng(),
    )));
    log::info!(
        "[field] {} particles on {}x{}",
        field.borrow().particles().len(),
        size.width,
        size.height
    );

    let surface = match render::CanvasSurface::new(canvas) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("no 2d surface, frames will be skipped: {:?}", e);
            None
        }
    };

    let resize = resize::ResizeAdapter::attach(canvas, field.clone())?;
    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface,
        render_loop: backdrop_core::RenderLoop::new(),
    }));
    let animation = frame::start_loop(ctx)?;
    Ok((animation, resize))
}

fn build_pointer(document: &web::Document) -> anyhow::Result<events::PointerListeners> {
    let tracker = SharedPointer::new(PointerTracker::new());
    let cursor = overlay::find_cursor(document);
    match &cursor {
        Some(el) => {
            let el = el.clone();
            tracker.subscribe(move |v| overlay::apply_variant(&el, *v));
        }
        None => log::info!("no #{} overlay; tracking pointer only", constants::CURSOR_ID),
    }
    events::wire_pointer_handlers(document, events::PointerWiring { tracker, cursor })
}

type SectionParts = (events::SectionObserver, SharedSections);

fn build_sections(
    document: &web::Document,
    threshold: f32,
) -> anyhow::Result<Option<SectionParts>> {
    let elements = dom::query_all(document, SECTION_SELECTOR);
    if elements.is_empty() {
        log::info!("no {} elements; section tracking skipped", SECTION_SELECTOR);
        return Ok(None);
    }
    let ids: Vec<String> = elements
        .iter()
        .filter_map(|el| el.get_attribute(SECTION_ATTR))
        .collect();
    let tracker = SectionTracker::new(ids, threshold).map_err(|e| anyhow::anyhow!(e))?;
    nav::mark_active(document, tracker.active());

    let tracker = SharedSections::new(tracker);
    let doc = document.clone();
    tracker.subscribe(move |id| {
        nav::mark_active(&doc, id);
        nav::dispatch_change(&doc, id);
    });

    let observer = events::SectionObserver::observe(&elements, tracker.clone())?;
    Ok(Some((observer, tracker)))
}
