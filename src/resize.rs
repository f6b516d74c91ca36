use crate::dom::{self, EventListener};
use backdrop_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps the canvas backing size and the field's surface size equal to the
/// window's inner size. Particles are left to the field's resize policy.
pub struct ResizeAdapter {
    listener: EventListener,
}

impl ResizeAdapter {
    pub fn attach(
        canvas: &web::HtmlCanvasElement,
        field: Rc<RefCell<ParticleField>>,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let canvas = canvas.clone();
        let listener = EventListener::attach(&window, "resize", move |_ev| {
            if !canvas.is_connected() {
                return;
            }
            if let Some(size) = dom::sync_canvas_to_window(&canvas) {
                field.borrow_mut().resize(size);
            }
        })?;
        Ok(Self { listener })
    }

    pub fn detach(&self) {
        self.listener.detach();
    }
}
