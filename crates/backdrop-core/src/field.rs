use crate::config::{FieldConfig, ResizePolicy};
use crate::links::LinkGrid;
use crate::particles::ParticleSet;
use crate::render::{render, RenderStats};
use crate::surface::{DrawSurface, SurfaceSize};
use rand::Rng;

/// Particle store plus the surface size it is simulated against.
pub struct ParticleField {
    config: FieldConfig,
    particles: ParticleSet,
    size: SurfaceSize,
    grid: LinkGrid,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, size: SurfaceSize, rng: &mut R) -> Self {
        let particles = ParticleSet::initialize(&config, size, rng);
        Self::with_particles(config, size, particles)
    }

    pub fn with_particles(config: FieldConfig, size: SurfaceSize, particles: ParticleSet) -> Self {
        let grid = LinkGrid::new(config.link_distance);
        Self {
            config,
            particles,
            size,
            grid,
        }
    }

    /// Advance the simulation one tick, then draw the frame.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> RenderStats {
        self.particles.step(self.size);
        render(
            surface,
            &self.particles,
            self.size,
            &self.config,
            Some(&mut self.grid),
        )
    }

    /// Adopt a new surface size. Particle count never changes here.
    pub fn resize(&mut self, size: SurfaceSize) {
        if self.config.resize_policy == ResizePolicy::Rescale {
            self.particles.rescale(self.size, size);
        }
        log::debug!(
            "[field] resize {}x{} -> {}x{}",
            self.size.width,
            self.size.height,
            size.width,
            size.height
        );
        self.size = size;
    }

    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles.reseed(&self.config, self.size, rng);
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
