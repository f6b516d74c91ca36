//! Proximity links between particles.
//!
//! A link joins two particles closer than `max_distance`; its opacity falls off
//! linearly from `max_alpha` at distance 0 to 0 at the threshold. Pairs are
//! enumerated over the particle sequence so that each unordered pair is
//! considered once and a particle is never paired with itself.

use crate::particles::Particle;
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Stroke opacity for a segment of length `distance`.
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32, max_alpha: f32) -> f32 {
    if !(max_distance > 0.0) || !distance.is_finite() || distance >= max_distance {
        return 0.0;
    }
    max_alpha * (1.0 - distance.max(0.0) / max_distance)
}

/// Number of unordered pairs examined by the pairwise enumeration.
#[inline]
pub const fn pair_candidates(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

#[inline]
fn try_link(
    particles: &[Particle],
    i: usize,
    j: usize,
    max_distance: f32,
    max_alpha: f32,
) -> Option<Link> {
    let distance = particles[i].position.distance(particles[j].position);
    if distance < max_distance {
        Some(Link {
            a: i,
            b: j,
            distance,
            alpha: link_alpha(distance, max_distance, max_alpha),
        })
    } else {
        None
    }
}

/// Visit every link, comparing each particle only with later ones.
pub fn for_each_link(
    particles: &[Particle],
    max_distance: f32,
    max_alpha: f32,
    mut visit: impl FnMut(Link),
) {
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if let Some(link) = try_link(particles, i, j, max_distance, max_alpha) {
                visit(link);
            }
        }
    }
}

type Cell = (i32, i32);

/// Uniform grid with cells of side `max_distance`.
///
/// Any two particles closer than `max_distance` sit in the same or adjacent
/// cells, so scanning the 3x3 neighbourhood finds every link. Links are the
/// same as [`for_each_link`] produces; only the visiting order differs.
#[derive(Debug, Default)]
pub struct LinkGrid {
    cell_size: f32,
    cells: FnvHashMap<Cell, SmallVec<[usize; 8]>>,
}

impl LinkGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FnvHashMap::default(),
        }
    }

    #[inline]
    fn cell_of(&self, particle: &Particle) -> Cell {
        (
            (particle.position.x / self.cell_size).floor() as i32,
            (particle.position.y / self.cell_size).floor() as i32,
        )
    }

    /// Re-bucket `particles`. Buckets are reused across frames; cells left
    /// empty are dropped so the map never outgrows the particle count.
    pub fn rebuild(&mut self, particles: &[Particle]) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (i, p) in particles.iter().enumerate() {
            let cell = self.cell_of(p);
            self.cells.entry(cell).or_default().push(i);
        }
        self.cells.retain(|_, bucket| !bucket.is_empty());
    }

    /// Number of occupied cells after the last rebuild.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn for_each_link(
        &mut self,
        particles: &[Particle],
        max_alpha: f32,
        mut visit: impl FnMut(Link),
    ) {
        if !(self.cell_size > 0.0) {
            return;
        }
        self.rebuild(particles);
        for (i, p) in particles.iter().enumerate() {
            let (cx, cy) = self.cell_of(p);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    // Cell indices saturate for tiny cells or huge coordinates
                    let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
                        continue;
                    };
                    let Some(bucket) = self.cells.get(&(nx, ny)) else {
                        continue;
                    };
                    for &j in bucket {
                        if j <= i {
                            continue;
                        }
                        if let Some(link) = try_link(particles, i, j, self.cell_size, max_alpha)
                        {
                            visit(link);
                        }
                    }
                }
            }
        }
    }
}
