use crate::constants::{
    ATTR_LINK_DISTANCE, ATTR_LINK_STRATEGY, ATTR_MAX_SPEED, ATTR_PARTICLE_COUNT,
    ATTR_RESIZE_POLICY, ATTR_SECTION_THRESHOLD,
};
use backdrop_core::constants::SECTION_VISIBILITY_THRESHOLD;
use backdrop_core::{FieldConfig, LinkStrategy, ResizePolicy};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub field: FieldConfig,
    pub section_threshold: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            section_threshold: SECTION_VISIBILITY_THRESHOLD,
        }
    }
}

fn parse_attr<T: FromStr>(get: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = get(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring malformed {}={:?}", name, raw);
            None
        }
    }
}

fn parse_with<T>(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = get(name)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        log::warn!("[config] ignoring unknown {}={:?}", name, raw);
    }
    parsed
}

/// Build the config from optional `data-*` attributes.
///
/// `get` looks up an attribute by name. Malformed values are logged and
/// skipped; a field config that fails validation falls back to defaults as a
/// whole, and so does an out-of-range section threshold.
pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> BackdropConfig {
    let mut cfg = BackdropConfig::default();
    let field = &mut cfg.field;

    if let Some(n) = parse_attr::<usize>(&get, ATTR_PARTICLE_COUNT) {
        field.particle_count = n;
    }
    if let Some(s) = parse_attr::<f32>(&get, ATTR_MAX_SPEED) {
        field.max_speed = s;
    }
    if let Some(d) = parse_attr::<f32>(&get, ATTR_LINK_DISTANCE) {
        field.link_distance = d;
    }
    if let Some(s) = parse_with(&get, ATTR_LINK_STRATEGY, LinkStrategy::parse) {
        field.link_strategy = s;
    }
    if let Some(p) = parse_with(&get, ATTR_RESIZE_POLICY, ResizePolicy::parse) {
        field.resize_policy = p;
    }
    if let Err(e) = cfg.field.validate() {
        log::warn!("[config] {}; using defaults", e);
        cfg.field = FieldConfig::default();
    }

    if let Some(t) = parse_attr::<f32>(&get, ATTR_SECTION_THRESHOLD) {
        if t > 0.0 && t <= 1.0 {
            cfg.section_threshold = t;
        } else {
            log::warn!("[config] section threshold {} outside (0, 1]; using default", t);
        }
    }
    cfg
}
