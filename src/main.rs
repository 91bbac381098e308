use tracksim::{run_track, Scenario, ScenarioConfig, SimStatus};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window at a fixed 60 Hz and print the finishing summary
    #[arg(long)]
    headless: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Drive the controller with synthetic 60 Hz timestamps until the whole
/// field finishes (or ten simulated minutes pass), then print the results
fn run_headless(mut scenario: Scenario) {
    let controller = &mut scenario.controller;
    controller.start();

    let frame_ms = 1000.0 / 60.0;
    let mut timestamp = 0.0;
    let max_ticks = 60 * 600;

    for _ in 0..max_ticks {
        controller.tick(timestamp);
        timestamp += frame_ms;
        if controller.status() == SimStatus::Finished {
            break;
        }
    }

    println!("t = {:.2} s, status = {:?}", controller.elapsed(), controller.status());
    for body in controller.bodies() {
        println!(
            "{:12} position = {:7.1} m, finished = {}",
            body.name, body.position, body.finished
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario);
    } else {
        run_track(scenario);
    }

    Ok(())
}
