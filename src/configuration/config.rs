//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and force-law constants
//! - [`DomainConfig`]     – periodic box extents
//! - [`RunConfig`]        – driver options (snapshot cadence, output path)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 100.0          # total simulation time
//!   dt: 0.1               # fixed step size
//!   n: 40                 # bead count
//!   r_c: 2.0              # force cutoff radius
//!   att: 2.0              # attraction strength
//!   seed: 42              # deterministic seed for initial placement
//!
//! domain:
//!   width: 10.0
//!   height: 10.0
//!
//! run:
//!   snapshot_every: 100   # steps between position snapshots
//!   output: "positions.csv"
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use anyhow::{bail, Result};
use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub dt: f64,    // time step size
    pub n: usize,   // bead count
    pub r_c: f64,   // cutoff radius - pair force is zero at and beyond it
    pub att: f64,   // attraction strength, sign selects attraction vs repulsion
    pub seed: u64,  // deterministic seed to make runs reproducable
}

/// Periodic box extents
#[derive(Deserialize, Debug, Clone)]
pub struct DomainConfig {
    pub width: f64,  // x-extent
    pub height: f64, // y-extent
}

/// Driver-side options; not part of the engine contract
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RunConfig {
    pub snapshot_every: Option<usize>, // steps between snapshots, None = final only
    pub output: Option<String>,        // snapshot CSV path, None = stdout
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Numerical parameters and force constants
    pub domain: DomainConfig,         // Periodic box
    #[serde(default)]
    pub run: RunConfig, // Driver options
}

impl ScenarioConfig {
    /// Reject parameter sets the engine would silently misbehave on.
    /// The engine itself never validates; this is the only gate.
    pub fn validate(&self) -> Result<()> {
        if self.parameters.dt <= 0.0 {
            bail!("dt must be positive, got {}", self.parameters.dt);
        }
        if self.parameters.r_c <= 0.0 {
            bail!("r_c must be positive, got {}", self.parameters.r_c);
        }
        if self.domain.width <= 0.0 || self.domain.height <= 0.0 {
            bail!(
                "domain extents must be positive, got {} x {}",
                self.domain.width,
                self.domain.height
            );
        }
        if self.parameters.t_end < 0.0 {
            bail!("t_end must be non-negative, got {}", self.parameters.t_end);
        }
        if self.run.snapshot_every == Some(0) {
            bail!("snapshot_every must be at least 1");
        }
        Ok(())
    }
}
