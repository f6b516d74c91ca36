use crate::config::FieldConfig;
use crate::surface::SurfaceSize;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    fn random<R: Rng + ?Sized>(config: &FieldConfig, surface: SurfaceSize, rng: &mut R) -> Self {
        // `gen::<f32>() * extent` instead of `gen_range` so an empty surface
        // collapses to the origin rather than panicking on an empty range.
        let position = Vec2::new(
            rng.gen::<f32>() * surface.width.max(0.0),
            rng.gen::<f32>() * surface.height.max(0.0),
        );
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
        );
        let radius = config.radius_min + rng.gen::<f32>() * (config.radius_max - config.radius_min);
        Self::new(position, velocity, radius)
    }

    /// Advance one tick and reflect off the surface bounds.
    #[inline]
    pub fn step(&mut self, surface: SurfaceSize) {
        self.position += self.velocity;
        self.velocity.x = reflect_axis(self.position.x, self.velocity.x, surface.width);
        self.velocity.y = reflect_axis(self.position.y, self.velocity.y, surface.height);
    }
}

/// Flip `v` when `p` lies outside `[0, extent]`, pointing it back inside.
///
/// For a particle that just crossed a bound this is a plain sign flip. A
/// particle already heading back in keeps its direction, so it is never
/// flipped twice on the same side.
#[inline]
pub fn reflect_axis(p: f32, v: f32, extent: f32) -> f32 {
    if p < 0.0 {
        v.abs()
    } else if p > extent {
        -v.abs()
    } else {
        v
    }
}

/// Fixed-size population of particles owned by the field.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn initialize<R: Rng + ?Sized>(
        config: &FieldConfig,
        surface: SurfaceSize,
        rng: &mut R,
    ) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(config, surface, rng))
            .collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discard every particle and spawn a fresh population.
    pub fn reseed<R: Rng + ?Sized>(
        &mut self,
        config: &FieldConfig,
        surface: SurfaceSize,
        rng: &mut R,
    ) {
        *self = Self::initialize(config, surface, rng);
        log::debug!(
            "[particles] reseeded {} particles in {}x{}",
            self.particles.len(),
            surface.width,
            surface.height
        );
    }

    pub fn step(&mut self, surface: SurfaceSize) {
        for p in &mut self.particles {
            p.step(surface);
        }
    }

    /// Scale positions from `from` to `to`; degenerate sizes leave positions untouched.
    pub fn rescale(&mut self, from: SurfaceSize, to: SurfaceSize) {
        if from.is_degenerate() || to.is_degenerate() {
            return;
        }
        let factor = Vec2::new(to.width / from.width, to.height / from.height);
        for p in &mut self.particles {
            p.position *= factor;
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
