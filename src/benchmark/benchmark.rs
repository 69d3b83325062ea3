use std::time::Instant;

use crate::simulation::domain::PeriodicDomain;
use crate::simulation::engine::System;
use crate::simulation::forces::LinearAttraction;
use crate::simulation::states::{Bead, NVec2};

/// Build a System of size `n` with deterministic positions, no rand needed
fn bench_system(n: usize, width: f64, height: f64) -> System {
    let domain = PeriodicDomain::new(width, height);
    let force = LinearAttraction { r_c: 2.0, att: 2.0 };
    let mut sys = System::new(0.01, n, domain, force);

    // deterministic scattered layout inside the box
    sys.beads = (0..n)
        .map(|i| {
            let i_f = i as f64;
            Bead::at_rest(NVec2::new(
                (i_f * 0.37).sin() * 0.45 * width,
                (i_f * 0.13).cos() * 0.45 * height,
            ))
        })
        .collect();

    sys
}

/// Time a single full step (pair loop + move + wrap) across system sizes
pub fn bench_step() {
    // Different system sizes to test
    let ns = [40, 80, 160, 320, 640, 1280]; //, 2560, 5120];

    for n in ns {
        let mut sys = bench_system(n, 10.0, 10.0);

        // Warm up
        sys.step();

        let t0 = Instant::now();
        sys.step();
        let dt_step = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, pairs = {:8}, step = {:8.6} s",
            sys.pair_list().len(),
            dt_step
        );
    }
}

/// Time a fixed run of steps at one size, reported as steps/second
pub fn bench_run(n: usize, steps: usize) {
    let mut sys = bench_system(n, 10.0, 10.0);

    let t0 = Instant::now();
    for _ in 0..steps {
        sys.step();
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "N = {n:5}, steps = {steps:6}, total = {:8.4} s, rate = {:10.1} steps/s",
        elapsed,
        steps as f64 / elapsed
    );
}
