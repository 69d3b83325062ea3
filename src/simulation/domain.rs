//! Periodic rectangular domain.
//!
//! `PeriodicDomain` holds the fixed box extents and provides the
//! single-fold wrap used both for minimum-image pair separations and for
//! re-confining positions after an integration step.

use crate::simulation::states::NVec2;

/// Rectangular box with wraparound boundaries. Extents are fixed for the
/// lifetime of a run.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicDomain {
    pub width: f64,  // x-extent
    pub height: f64, // y-extent
}

impl PeriodicDomain {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Fold `value` once toward the primary interval `[-extent/2, extent/2]`.
    ///
    /// A single box length is subtracted at most once. If `|value|` exceeds
    /// `extent` by more than `extent/2`, one call does not fully re-fold it;
    /// callers may only rely on this for displacements that started in-range
    /// and moved by less than one box length.
    pub fn wrap(value: f64, extent: f64) -> f64 {
        if value.abs() > 0.5 * extent {
            value - value.signum() * extent
        } else {
            value
        }
    }

    /// Apply `wrap` independently per axis using the box's own extents.
    ///
    /// Used for minimum-image separations (input: raw `xi - xj`) and for
    /// re-confining absolute positions after a step (input: the position
    /// itself, which can only have left the box by a bounded amount).
    pub fn periodic_correct(&self, d: NVec2) -> NVec2 {
        NVec2::new(Self::wrap(d.x, self.width), Self::wrap(d.y, self.height))
    }
}
