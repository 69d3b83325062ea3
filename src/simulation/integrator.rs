//! Fixed-step position update for a single bead
//!
//! Explicit kinematic advance, constant acceleration assumed over the
//! interval. The velocity is read but deliberately never written: the
//! source system this reproduces performs no velocity kick, so `v` keeps
//! its construction-time value for the entire run.

use super::states::Bead;

/// Advance one bead's position by one step:
/// x_n+1 = x_n + v * dt + 1/2 * a * dt^2, independently per axis.
/// Mutates position in place; velocity and acceleration are untouched.
pub fn move_bead(bead: &mut Bead, dt: f64) {
    bead.x += bead.v * dt + 0.5 * bead.a * dt * dt;
}
