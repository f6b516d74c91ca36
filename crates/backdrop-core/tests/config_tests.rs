// Default configuration and validation.

use backdrop_core::constants::*;
use backdrop_core::{BackdropError, FieldConfig, LinkStrategy, ResizePolicy, Rgba, SurfaceSize};

#[test]
fn defaults_match_reference_tuning() {
    let c = FieldConfig::default();
    assert_eq!(c.particle_count, 60);
    assert_eq!(c.max_speed, 0.15);
    assert_eq!((c.radius_min, c.radius_max), (0.5, 2.0));
    assert_eq!(c.link_distance, 120.0);
    assert_eq!(c.link_max_alpha, 0.1);
    assert_eq!(c.link_line_width, 0.5);
    assert_eq!(c.particle_color.css(), "rgba(255, 255, 255, 0.4)");
    assert_eq!(c.link_strategy, LinkStrategy::Auto);
    assert_eq!(c.resize_policy, ResizePolicy::Keep);
    assert!(c.validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(RADIUS_MIN > 0.0 && RADIUS_MIN < RADIUS_MAX);
    assert!(LINK_MAX_ALPHA > 0.0 && LINK_MAX_ALPHA <= 1.0);
    assert!(PARTICLE_ALPHA > 0.0 && PARTICLE_ALPHA <= 1.0);
    assert!(SECTION_VISIBILITY_THRESHOLD > 0.0 && SECTION_VISIBILITY_THRESHOLD <= 1.0);
    assert!(GRID_AUTO_THRESHOLD > PARTICLE_COUNT);
    // A tick's displacement must be far smaller than the link range
    assert!(MAX_SPEED * 10.0 < LINK_DISTANCE);
}

#[test]
fn validation_rejects_bad_values() {
    let bad = [
        FieldConfig {
            max_speed: -1.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            radius_min: 0.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            radius_min: 3.0,
            radius_max: 2.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            link_distance: 0.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            link_distance: 1e-30,
            ..FieldConfig::default()
        },
        FieldConfig {
            link_distance: 0.5,
            ..FieldConfig::default()
        },
        FieldConfig {
            link_max_alpha: 1.5,
            ..FieldConfig::default()
        },
        FieldConfig {
            link_line_width: f32::NAN,
            ..FieldConfig::default()
        },
    ];
    for c in bad {
        assert!(
            matches!(c.validate(), Err(BackdropError::InvalidConfig(_))),
            "accepted {c:?}"
        );
    }
}

#[test]
fn smallest_link_distance_is_accepted() {
    let c = FieldConfig {
        link_distance: MIN_LINK_DISTANCE,
        ..FieldConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn zero_particles_is_a_valid_config() {
    let c = FieldConfig {
        particle_count: 0,
        ..FieldConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn parse_strategy_and_policy() {
    assert_eq!(LinkStrategy::parse(" Grid "), Some(LinkStrategy::Grid));
    assert_eq!(LinkStrategy::parse("pairwise"), Some(LinkStrategy::Pairwise));
    assert_eq!(LinkStrategy::parse("quadtree"), None);
    assert_eq!(ResizePolicy::parse("RESCALE"), Some(ResizePolicy::Rescale));
    assert_eq!(ResizePolicy::parse("keep"), Some(ResizePolicy::Keep));
    assert_eq!(ResizePolicy::parse(""), None);
}

#[test]
fn rgba_css_clamps_alpha() {
    assert_eq!(Rgba::new([1, 2, 3], 2.0).css(), "rgba(1, 2, 3, 1)");
    assert_eq!(Rgba::new([0, 0, 0], 0.25).with_alpha(0.0).css(), "rgba(0, 0, 0, 0)");
}

#[test]
fn degenerate_surface_sizes() {
    assert!(SurfaceSize::new(0.0, 10.0).is_degenerate());
    assert!(SurfaceSize::new(10.0, -1.0).is_degenerate());
    assert!(SurfaceSize::new(f32::NAN, 10.0).is_degenerate());
    assert!(!SurfaceSize::from_pixels(1, 1).is_degenerate());
}
