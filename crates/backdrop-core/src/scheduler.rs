//! Render loop state machine.
//!
//! The platform owns the actual frame callback (`requestAnimationFrame` in the
//! browser). Every callback goes through [`RenderLoop::frame`], which checks
//! the state before touching the field, so once [`RenderLoop::cancel`] returns
//! no further frame draws anything.

use crate::error::{BackdropError, Result};
use crate::field::ParticleField;
use crate::render::RenderStats;
use crate::surface::DrawSurface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Stepped and drew; schedule the next frame.
    Rendered(RenderStats),
    /// No surface yet; nothing happened but the loop keeps going.
    Skipped,
    /// Not running; do not schedule again.
    Halted,
}

impl FrameOutcome {
    #[inline]
    pub fn reschedule(&self) -> bool {
        !matches!(self, FrameOutcome::Halted)
    }
}

#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) -> Result<()> {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                Ok(())
            }
            LoopState::Running => Ok(()),
            LoopState::Stopped => Err(BackdropError::LoopStopped),
        }
    }

    pub fn frame<S: DrawSurface>(
        &mut self,
        field: &mut ParticleField,
        surface: Option<&mut S>,
    ) -> FrameOutcome {
        if self.state != LoopState::Running {
            return FrameOutcome::Halted;
        }
        let Some(surface) = surface else {
            return FrameOutcome::Skipped;
        };
        self.frames += 1;
        FrameOutcome::Rendered(field.tick(surface))
    }

    /// Stop the loop. Returns `false` when it was already stopped.
    pub fn cancel(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        log::debug!("[loop] stopped after {} frames", self.frames);
        self.state = LoopState::Stopped;
        true
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
