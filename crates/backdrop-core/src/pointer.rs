use crate::notify::Observed;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

impl CursorVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorVariant::Default => "default",
            CursorVariant::Hover => "hover",
        }
    }
}

/// CSS transform placing the cursor overlay at `pos` (client pixels).
#[inline]
pub fn cursor_transform(pos: Vec2) -> String {
    format!("translate({}px, {}px)", pos.x, pos.y)
}

/// Latest pointer position and cursor variant.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    position: Vec2,
    variant: CursorVariant,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw pointer move and return the position to place the overlay at.
    #[inline]
    pub fn on_move(&mut self, x: f32, y: f32) -> Vec2 {
        self.position = Vec2::new(x, y);
        self.position
    }

    pub fn on_hover_enter(&mut self) -> bool {
        self.set_variant(CursorVariant::Hover)
    }

    pub fn on_hover_leave(&mut self) -> bool {
        self.set_variant(CursorVariant::Default)
    }

    /// Returns whether the variant changed.
    pub fn set_variant(&mut self, variant: CursorVariant) -> bool {
        if self.variant == variant {
            return false;
        }
        self.variant = variant;
        true
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }
}

/// Pointer state shared between event handlers; subscribers hear variant
/// changes after the tracker borrow is released.
pub type SharedPointer = Observed<PointerTracker, CursorVariant>;

impl Observed<PointerTracker, CursorVariant> {
    pub fn on_move(&self, x: f32, y: f32) -> Vec2 {
        self.update(|p| {
            p.on_move(x, y);
            None
        });
        self.state().position()
    }

    pub fn set_variant(&self, variant: CursorVariant) -> bool {
        self.update(|p| p.set_variant(variant).then_some(variant)).is_some()
    }
}
