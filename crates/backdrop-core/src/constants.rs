// Shared tuning constants for the backdrop simulation and trackers.

// Population
pub const PARTICLE_COUNT: usize = 60;

// Motion (units per tick)
pub const MAX_SPEED: f32 = 0.15; // each velocity component lies in [-MAX_SPEED, MAX_SPEED)

// Disc sizing
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_MAX: f32 = 2.0;

// Proximity links
pub const LINK_DISTANCE: f32 = 120.0; // pairs closer than this get a segment
pub const MIN_LINK_DISTANCE: f32 = 1.0; // smallest accepted link range, in CSS pixels
pub const LINK_MAX_ALPHA: f32 = 0.1; // opacity of a segment at distance 0
pub const LINK_LINE_WIDTH: f32 = 0.5;

// Above this many particles `LinkStrategy::Auto` switches to the grid index
pub const GRID_AUTO_THRESHOLD: usize = 400;

// Colours
pub const PARTICLE_RGB: [u8; 3] = [255, 255, 255];
pub const PARTICLE_ALPHA: f32 = 0.4;
pub const LINK_RGB: [u8; 3] = [255, 255, 255];

// Section tracking
pub const SECTION_VISIBILITY_THRESHOLD: f32 = 0.3;
