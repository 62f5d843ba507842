use nbsim::{ScenarioConfig, Scenario};
use nbsim::{run_2d, run_3d, print_bodies};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Direct-summation N-body gravity simulator")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Run `total_steps` without opening a window and log the final state
    #[arg(long)]
    headless: bool,

    /// Override `engine.total_steps` from the scenario file
    #[arg(long)]
    steps: Option<usize>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    scenario_cfg.validate()?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(steps) = args.steps {
        scenario_cfg.engine.total_steps = steps;
    }
    info!("loaded scenario {}", args.file_name);

    let mut scenario = Scenario::build_scenario(scenario_cfg);
    print_bodies("initial", &scenario.simulator);

    if args.headless {
        scenario.run_batch();
        print_bodies("final", &scenario.simulator);
    } else if !scenario.engine.dimension {
        run_2d(scenario);
    } else {
        run_3d(scenario);
    }

    Ok(())
}
