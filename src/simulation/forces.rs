//! Pair force laws for the bead engine
//!
//! Defines the scalar pair-force trait and the linear short-ranged
//! attraction used by the simulation

/// Trait for scalar pairwise force laws.
/// `magnitude(r)` maps a separation distance to a force magnitude; the
/// engine decomposes it along the minimum-image separation vector.
pub trait PairForce {
    fn magnitude(&self, r: f64) -> f64;
}

/// Linearly decaying short-ranged attraction
/// Magnitude `att` at r = 0, falling to 0 at the cutoff `r_c`, identically
/// zero beyond it
pub struct LinearAttraction {
    pub r_c: f64, // cutoff radius
    pub att: f64, // attraction strength
}

impl PairForce for LinearAttraction {
    fn magnitude(&self, r: f64) -> f64 {
        if r < self.r_c {
            self.att * (1.0 - r / self.r_c)
        } else {
            0.0
        }
    }
}
