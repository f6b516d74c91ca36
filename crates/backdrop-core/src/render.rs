use crate::config::FieldConfig;
use crate::links::{for_each_link, LinkGrid};
use crate::particles::ParticleSet;
use crate::surface::{DrawSurface, SurfaceSize};

/// Draw-call counts for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub discs: usize,
    pub links: usize,
}

/// Clear the surface, draw every particle as a disc, then every proximity link.
///
/// `grid` is only consulted when the config's strategy selects the grid for
/// this population size.
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    particles: &ParticleSet,
    size: SurfaceSize,
    config: &FieldConfig,
    grid: Option<&mut LinkGrid>,
) -> RenderStats {
    surface.clear(size);

    let mut stats = RenderStats::default();
    for p in particles {
        surface.fill_disc(p.position, p.radius, config.particle_color);
        stats.discs += 1;
    }

    let slice = particles.as_slice();
    let mut draw = |link: crate::links::Link| {
        surface.stroke_line(
            slice[link.a].position,
            slice[link.b].position,
            config.link_color.with_alpha(link.alpha),
            config.link_line_width,
        );
        stats.links += 1;
    };
    match grid {
        Some(grid) if config.link_strategy.uses_grid(slice.len()) => {
            grid.for_each_link(slice, config.link_max_alpha, &mut draw)
        }
        _ => for_each_link(slice, config.link_distance, config.link_max_alpha, &mut draw),
    }
    stats
}
