use crate::render::CanvasSurface;
use backdrop_core::{FrameOutcome, ParticleField, RenderLoop};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub surface: Option<CanvasSurface>,
    pub render_loop: RenderLoop,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameOutcome {
        // A detached canvas counts as no surface: skip drawing, keep ticking.
        let surface = self.surface.as_mut().filter(|s| s.is_attached());
        let mut field = self.field.borrow_mut();
        self.render_loop.frame(&mut field, surface)
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
pub struct AnimationLoop {
    ctx: Rc<RefCell<FrameContext>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::warn!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<AnimationLoop> {
    ctx.borrow_mut()
        .render_loop
        .start()
        .map_err(|e| anyhow::anyhow!(e))?;

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let outcome = ctx_tick.borrow_mut().frame();
        if outcome.reschedule() {
            request_frame(&tick_clone, &pending_tick);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    log::info!("[loop] started");
    Ok(AnimationLoop { ctx, pending, tick })
}

impl AnimationLoop {
    /// Stop the loop synchronously. Safe to call more than once.
    pub fn cancel(&self) {
        if !self.ctx.borrow_mut().render_loop.cancel() {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        log::info!(
            "[loop] cancelled after {} frames",
            self.ctx.borrow().render_loop.frames()
        );
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
        // Break the closure's reference to its own slot.
        self.tick.borrow_mut().take();
    }
}
