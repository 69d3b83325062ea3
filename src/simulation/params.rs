//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - bead count,
//! - cutoff radius and attraction strength for the pair force,
//! - random seed for the initial configuration

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64,    // step size
    pub n: usize,   // bead count
    pub r_c: f64,   // cutoff radius
    pub att: f64,   // attraction strength
    pub seed: u64,  // deterministic seed
}
