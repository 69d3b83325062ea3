//! The simulation engine: bead arena, pair list, and the step loop
//!
//! `System` exclusively owns the bead collection and the periodic domain.
//! One `step()` performs, in strict order:
//! 1. zero every acceleration accumulator,
//! 2. evaluate every unordered pair exactly once (minimum-image separations),
//! 3. advance every position kinematically,
//! 4. re-wrap every position into the box.

use rand::Rng;

use crate::simulation::domain::PeriodicDomain;
use crate::simulation::forces::PairForce;
use crate::simulation::integrator::move_bead;
use crate::simulation::states::{Bead, NVec2};

/// Bead system with a static pair list.
///
/// The pair list is built once at construction and never changes as beads
/// move: all n(n-1)/2 unordered index pairs (i, j) with i < j.
pub struct System {
    pub dt: f64,           // step size
    pub n: usize,          // bead count, fixed for the run
    pub beads: Vec<Bead>,  // bead arena, index-addressed
    pub domain: PeriodicDomain,
    force: Box<dyn PairForce + Send + Sync>,
    pair_list: Vec<(usize, usize)>,
}

impl System {
    /// Build an engine with an empty bead arena; call
    /// [`initial_configuration`](Self::initial_configuration) to populate it.
    pub fn new(
        dt: f64,
        n: usize,
        domain: PeriodicDomain,
        force: impl PairForce + Send + Sync + 'static,
    ) -> Self {
        // All unordered pairs, i < j. Size n(n-1)/2.
        let mut pair_list = Vec::with_capacity(n.saturating_sub(1) * n / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pair_list.push((i, j));
            }
        }

        Self {
            dt,
            n,
            beads: Vec::new(),
            domain,
            force: Box::new(force),
            pair_list,
        }
    }

    /// Populate `n` beads with positions drawn uniformly from
    /// `[-width/2, width/2] x [-height/2, height/2]`, zero velocity and
    /// acceleration. The sampler is injected; any uniform `Rng` satisfies
    /// the contract.
    pub fn initial_configuration(&mut self, rng: &mut impl Rng) {
        let half_w = 0.5 * self.domain.width;
        let half_h = 0.5 * self.domain.height;

        self.beads = (0..self.n)
            .map(|_| {
                let x = rng.gen_range(-half_w..half_w);
                let y = rng.gen_range(-half_h..half_h);
                Bead::at_rest(NVec2::new(x, y))
            })
            .collect();
    }

    /// The static unordered pair list.
    pub fn pair_list(&self) -> &[(usize, usize)] {
        &self.pair_list
    }

    /// Index-aligned position snapshot for external consumers (rendering,
    /// output). Order matches construction order.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.beads.iter().map(|b| (b.x.x, b.x.y)).collect()
    }

    /// Accumulate the pair force between beads `i` and `j`.
    ///
    /// The raw separation `x_i - x_j` is folded to its minimum image, the
    /// scalar force law is evaluated at the folded distance, and the
    /// per-axis decomposition `f * d / r` is added to bead i and subtracted
    /// from bead j. Equal and opposite by construction.
    ///
    /// Precondition: the two beads must not exactly coincide. At r = 0 the
    /// decomposition divides by zero and NaN propagates into both
    /// accumulators; this is not guarded.
    fn pair_interaction(&mut self, i: usize, j: usize) {
        // d is the displacement from j to i, folded across the boundary:
        // if i sits just inside the left edge and j just inside the right,
        // the folded d points across the seam, not across the box interior.
        let raw = self.beads[i].x - self.beads[j].x;
        let d = self.domain.periodic_correct(raw);

        let r = d.norm();
        let f = self.force.magnitude(r);

        // Per-axis contribution (f * dx / r, f * dy / r).
        let kick = (f / r) * d;

        // Newton's third law: i gets +kick, j gets -kick.
        self.beads[i].a += kick;
        self.beads[j].a -= kick;
    }

    /// Advance the system by one step.
    ///
    /// Accelerations are fully rebuilt each call; nothing carries over
    /// between steps, so a step is a pure function of the current
    /// positions and velocities.
    pub fn step(&mut self) {
        // 1. Zero the accumulators.
        for b in self.beads.iter_mut() {
            b.a = NVec2::zeros();
        }

        // 2. Every unordered pair exactly once. Evaluation order does not
        // affect the summed result beyond floating-point rounding.
        for k in 0..self.pair_list.len() {
            let (i, j) = self.pair_list[k];
            self.pair_interaction(i, j);
        }

        // 3. Kinematic position advance with the accumulated accelerations.
        let dt = self.dt;
        for b in self.beads.iter_mut() {
            move_bead(b, dt);
        }

        // 4. Re-confine. One step moves a bead by a bounded amount, so a
        // single fold per axis is enough.
        for b in self.beads.iter_mut() {
            b.x = self.domain.periodic_correct(b.x);
        }
    }
}
