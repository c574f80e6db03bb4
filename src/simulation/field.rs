//! Population and per-frame stepping logic for the particle field
//!
//! Provides batch spawning (`populate`), the per-particle frame update
//! (`update_particle`: boundary reflection, pointer repulsion, drift),
//! the whole-population step (`step`), and wholesale regeneration on
//! resize (`resize`), all driven by `Params` and a caller-supplied `Rng`

use rand::Rng;

use super::params::Params;
use super::states::{Field, NVec2, Particle, Pointer, Rgba};

/// Sample one coordinate so the particle sits fully inside the surface
/// with a margin of twice its radius on both sides.
fn spawn_coord<R: Rng + ?Sized>(dim: f64, size: f64, rng: &mut R) -> f64 {
    let margin = 2.0 * size;
    if dim - margin > margin {
        rng.gen_range(margin..dim - margin)
    } else {
        // surface too small for the margin, fall back to the midpoint
        dim / 2.0
    }
}

/// Spawn a fresh population for a `width` x `height` surface.
///
/// Count is floor(width * height / density) — deterministic for given
/// dimensions. Sizes are uniform in [size_min, size_max), positions keep a
/// 2*size margin from every edge, and drift components are uniform in
/// [-max_drift, max_drift) on each axis independently.
pub fn populate<R: Rng + ?Sized>(
    width: f64,
    height: f64,
    params: &Params,
    rng: &mut R,
) -> Vec<Particle> {
    let count = (width * height / params.density).floor() as usize;
    let mut particles = Vec::with_capacity(count);

    for _ in 0..count {
        let size = rng.gen_range(params.size_min..params.size_max);
        let x = spawn_coord(width, size, rng);
        let y = spawn_coord(height, size, rng);
        let vx = rng.gen_range(-params.max_drift..params.max_drift);
        let vy = rng.gen_range(-params.max_drift..params.max_drift);

        particles.push(Particle {
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
            size,
            color: Rgba::PARTICLE,
        });
    }

    particles
}

/// Advance one particle by one frame, in-place.
///
/// Order matters and is fixed:
/// 1. Reflection — checked against the position *before* this frame's
///    drift. A fast particle can therefore sit marginally outside the
///    surface for one frame; the flipped velocity brings it back. No
///    clamping.
/// 2. Pointer repulsion — skipped entirely while the pointer position is
///    unknown. The four directional branches below are independent (both
///    axes can fire in one frame) and each is suppressed within an
///    `edge_factor * size` margin of the far boundary so the nudge cannot
///    eject the particle. The branch conditions are kept exactly as the
///    original page ships them; see DESIGN.md before "fixing" anything.
/// 3. Drift — position += velocity, every frame.
pub fn update_particle(
    p: &mut Particle,
    width: f64,
    height: f64,
    pointer: &Pointer,
    params: &Params,
) {
    if p.x.x > width || p.x.x < 0.0 {
        p.v.x = -p.v.x;
    }
    if p.x.y > height || p.x.y < 0.0 {
        p.v.y = -p.v.y;
    }

    if let Some(m) = pointer.position {
        let dx = m.x - p.x.x;
        let dy = m.y - p.x.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < pointer.radius + p.size {
            let edge = p.size * params.edge_factor;
            if m.x < p.x.x && p.x.x < width - edge {
                p.x.x += params.nudge;
            }
            if m.x > p.x.x && p.x.x > edge {
                p.x.x -= params.nudge;
            }
            if m.y < p.x.y && p.x.y < height - edge {
                p.x.y += params.nudge;
            }
            if m.y > p.x.y && p.x.y > edge {
                p.x.y -= params.nudge;
            }
        }
    }

    p.x += p.v;
}

/// Advance the whole population by one frame, in index order.
pub fn step(field: &mut Field, pointer: &Pointer, params: &Params) {
    let (width, height) = (field.width, field.height);
    for p in field.particles.iter_mut() {
        update_particle(p, width, height, pointer, params);
    }
}

/// Apply new surface dimensions and regenerate the population wholesale.
///
/// Old particles are discarded, never repositioned; identical dimensions
/// still produce a fresh (same-sized) population.
pub fn resize<R: Rng + ?Sized>(
    field: &mut Field,
    width: f64,
    height: f64,
    params: &Params,
    rng: &mut R,
) {
    field.width = width;
    field.height = height;
    field.particles = populate(width, height, params, rng);
}
