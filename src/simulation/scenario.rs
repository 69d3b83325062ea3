//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the bead system (`System`) with beads placed at t = 0
//!
//! Initial placement consumes the configured seed through a `StdRng`, so a
//! scenario builds identically every time.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::domain::PeriodicDomain;
use crate::simulation::engine::System;
use crate::simulation::forces::LinearAttraction;
use crate::simulation::params::Parameters;

/// Fully-initialized simulation scenario: parameters plus the populated
/// bead system. Consumed by the driver loop and the snapshot writer.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            n: p_cfg.n,
            r_c: p_cfg.r_c,
            att: p_cfg.att,
            seed: p_cfg.seed,
        };

        // Domain (runtime) from DomainConfig
        let domain = PeriodicDomain::new(cfg.domain.width, cfg.domain.height);

        // Force law from the scenario constants
        let force = LinearAttraction {
            r_c: parameters.r_c,
            att: parameters.att,
        };

        // System with beads placed from the seeded sampler
        let mut system = System::new(parameters.dt, parameters.n, domain, force);
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        system.initial_configuration(&mut rng);

        Self { parameters, system }
    }
}
