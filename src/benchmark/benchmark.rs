use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::field::{populate, step};
use crate::simulation::params::Params;
use crate::simulation::states::{Field, NVec2, Pointer};

/// Wall-clock stepping benchmark over a ladder of surface sizes.
///
/// Spawns a seeded population per size, then times a burst of frames with
/// the pointer parked mid-surface so the repulsion branch is exercised.
pub fn bench_step() {
    // Square surfaces to test; population grows with area / density
    let dims = [400.0, 800.0, 1600.0, 3200.0, 6400.0];
    let frames = 1000;

    let params = Params::default();

    for dim in dims {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = populate(dim, dim, &params, &mut rng);
        let count = particles.len();

        let mut field = Field {
            particles,
            width: dim,
            height: dim,
        };

        let pointer = Pointer {
            position: Some(NVec2::new(dim / 2.0, dim / 2.0)),
            radius: params.pointer_radius,
        };

        let t0 = Instant::now();
        for _ in 0..frames {
            step(&mut field, &pointer, &params);
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "bench_step: {dim:>6.0} x {dim:<6.0} {count:>6} particles  {frames} frames in {elapsed:>9.3} ms  ({:.4} ms/frame)",
            elapsed / frames as f64
        );
    }
}
