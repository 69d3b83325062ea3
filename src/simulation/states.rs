//! Core state types for the bead simulation.
//!
//! Defines the 2D bead struct using `NVec2`:
//! - `Bead` carries position, velocity, and an acceleration accumulator.
//!
//! The engine owns the full bead collection; see `engine.rs`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Bead {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration accumulator, rebuilt every step
}

impl Bead {
    /// Bead at rest at `x`: zero velocity, zero acceleration.
    pub fn at_rest(x: NVec2) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
        }
    }
}
