pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Bead, NVec2};
pub use simulation::domain::PeriodicDomain;
pub use simulation::params::Parameters;
pub use simulation::forces::{PairForce, LinearAttraction};
pub use simulation::integrator::move_bead;
pub use simulation::engine::System;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, DomainConfig, RunConfig};

pub use output::snapshot::SnapshotWriter;

pub use benchmark::benchmark::{bench_step, bench_run};
