use crate::constants::*;
use crate::error::{BackdropError, Result};
use crate::surface::Rgba;

/// How proximity links are enumerated each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStrategy {
    /// Compare every particle with every later particle, O(n²).
    Pairwise,
    /// Bucket particles into cells of side `link_distance` first.
    Grid,
    /// Pairwise up to `GRID_AUTO_THRESHOLD` particles, grid above.
    #[default]
    Auto,
}

impl LinkStrategy {
    pub fn uses_grid(self, particle_count: usize) -> bool {
        match self {
            LinkStrategy::Pairwise => false,
            LinkStrategy::Grid => true,
            LinkStrategy::Auto => particle_count > GRID_AUTO_THRESHOLD,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairwise" => Some(LinkStrategy::Pairwise),
            "grid" => Some(LinkStrategy::Grid),
            "auto" => Some(LinkStrategy::Auto),
            _ => None,
        }
    }
}

/// What happens to existing particles when the surface changes size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Leave particles where they are; stragglers drift back via reflection.
    #[default]
    Keep,
    /// Scale positions proportionally to the new size.
    Rescale,
}

impl ResizePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Some(ResizePolicy::Keep),
            "rescale" => Some(ResizePolicy::Rescale),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub link_line_width: f32,
    pub particle_color: Rgba,
    pub link_color: Rgba,
    pub link_strategy: LinkStrategy,
    pub resize_policy: ResizePolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            max_speed: MAX_SPEED,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            link_line_width: LINK_LINE_WIDTH,
            particle_color: Rgba::new(PARTICLE_RGB, PARTICLE_ALPHA),
            link_color: Rgba::new(LINK_RGB, LINK_MAX_ALPHA),
            link_strategy: LinkStrategy::default(),
            resize_policy: ResizePolicy::default(),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(BackdropError::InvalidConfig(msg));
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return invalid(format!("max_speed must be >= 0, got {}", self.max_speed));
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max)
            || !self.radius_max.is_finite()
        {
            return invalid(format!(
                "radius range must satisfy 0 < min <= max, got [{}, {}]",
                self.radius_min, self.radius_max
            ));
        }
        if !(self.link_distance.is_finite() && self.link_distance >= MIN_LINK_DISTANCE) {
            return invalid(format!(
                "link_distance must be >= {MIN_LINK_DISTANCE}, got {}",
                self.link_distance
            ));
        }
        if !(0.0..=1.0).contains(&self.link_max_alpha) {
            return invalid(format!(
                "link_max_alpha must be in [0, 1], got {}",
                self.link_max_alpha
            ));
        }
        if !(self.link_line_width.is_finite() && self.link_line_width > 0.0) {
            return invalid(format!(
                "link_line_width must be > 0, got {}",
                self.link_line_width
            ));
        }
        Ok(())
    }
}
