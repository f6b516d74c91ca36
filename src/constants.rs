// DOM hooks the frontend binds to.
//
// The page markup owns these elements; the wasm side only looks them up and
// never creates them.

// Canvas the particle field is drawn into
pub const CANVAS_ID: &str = "backdrop";

// Fixed-position cursor overlay element
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_HOVER_CLASS: &str = "cursor--hover";

// Elements that switch the cursor into its hover variant
pub const HOVER_TARGET_SELECTOR: &str = "[data-cursor-hover]";

// Observed document regions and the nav indicators that mirror them
pub const SECTION_ATTR: &str = "data-section";
pub const SECTION_SELECTOR: &str = "[data-section]";
pub const NAV_ATTR: &str = "data-nav";
pub const NAV_SELECTOR: &str = "[data-nav]";
pub const NAV_ACTIVE_ATTR: &str = "data-active";

// Dispatched on `document` whenever the active section changes
pub const SECTION_CHANGE_EVENT: &str = "backdrop:sectionchange";

// Optional `data-*` overrides read from the canvas element
pub const ATTR_PARTICLE_COUNT: &str = "data-particle-count";
pub const ATTR_MAX_SPEED: &str = "data-max-speed";
pub const ATTR_LINK_DISTANCE: &str = "data-link-distance";
pub const ATTR_LINK_STRATEGY: &str = "data-link-strategy";
pub const ATTR_RESIZE_POLICY: &str = "data-resize-policy";
pub const ATTR_SECTION_THRESHOLD: &str = "data-section-threshold";
