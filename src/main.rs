use beadsim::{Scenario, ScenarioConfig, SnapshotWriter};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "beads.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    scenario_cfg.validate()?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;
    let run_cfg = scenario_cfg.run.clone();

    let mut scenario = Scenario::build_scenario(scenario_cfg);
    let p = &scenario.parameters;

    let n_steps = (p.t_end / p.dt).round() as usize;
    let snapshot_every = run_cfg.snapshot_every.unwrap_or(n_steps.max(1));

    println!(
        "beadsim: n = {}, dt = {}, steps = {}, box = {} x {}",
        p.n, p.dt, n_steps, scenario.system.domain.width, scenario.system.domain.height
    );

    let out: Box<dyn Write> = match &run_cfg.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut snapshots = SnapshotWriter::new(out);

    snapshots.write(0, &scenario.system.positions())?;

    for step in 1..=n_steps {
        scenario.system.step();
        if step % snapshot_every == 0 || step == n_steps {
            snapshots.write(step, &scenario.system.positions())?;
        }
    }

    Ok(())
}
