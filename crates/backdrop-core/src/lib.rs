pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod links;
pub mod notify;
pub mod particles;
pub mod pointer;
pub mod render;
pub mod scheduler;
pub mod sections;
pub mod surface;

pub use config::*;
pub use error::{BackdropError, Result};
pub use field::ParticleField;
pub use links::{for_each_link, link_alpha, pair_candidates, Link, LinkGrid};
pub use notify::{Notifier, Observed, SubscriptionId};
pub use particles::{Particle, ParticleSet};
pub use pointer::{cursor_transform, CursorVariant, PointerTracker, SharedPointer};
pub use render::{render, RenderStats};
pub use scheduler::{FrameOutcome, LoopState, RenderLoop};
pub use sections::{SectionTracker, SharedSections};
pub use surface::{DrawSurface, Rgba, SurfaceSize};
