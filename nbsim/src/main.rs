use nbsim::{Scenario, ScenarioConfig, System};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless gravitational N-body simulator")]
struct Args {
    /// Scenario file, looked up as given and then under `scenarios/`
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Number of steps to run, overrides `parameters.steps`
    #[arg(short = 'n', long)]
    steps: Option<u64>,

    /// Print every trajectory as `body,step,x,y` rows instead of the final state
    #[arg(long)]
    csv: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.is_file() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn write_trajectories(out: &mut impl Write, system: &System) -> io::Result<()> {
    writeln!(out, "body,step,x,y")?;
    for (i, body) in system.bodies().iter().enumerate() {
        for (step, p) in body.trajectory().iter().enumerate() {
            writeln!(out, "{},{},{},{}", i, step, p.x, p.y)?;
        }
    }
    Ok(())
}

fn write_final_state(out: &mut impl Write, system: &System) -> io::Result<()> {
    writeln!(out, "t = {} after {} steps", system.time(), system.steps())?;
    for (i, body) in system.bodies().iter().enumerate() {
        let color = body.appearance().color.as_deref().unwrap_or("-");
        let (x, v) = (body.position(), body.velocity());
        writeln!(
            out,
            "{:3} {:8} x = ({:+.6}, {:+.6})  v = ({:+.6}, {:+.6})",
            i, color, x.x, x.y, v.x, v.y
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let steps = args.steps.unwrap_or(scenario.parameters.steps);
    let energy_before = scenario.total_energy();
    let momentum_before = scenario.system.total_momentum();

    // Keep the trajectories recorded so far even if the run halts early
    let mut outcome = Ok(());
    for item in scenario.run(steps) {
        match item {
            Ok(snapshot) => debug!("step {} t = {}", snapshot.step, snapshot.time),
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    info!(
        "energy drift {:e}, momentum drift {:e}",
        scenario.total_energy() - energy_before,
        (scenario.system.total_momentum() - momentum_before).norm()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.csv {
        write_trajectories(&mut out, &scenario.system)?;
    } else {
        write_final_state(&mut out, &scenario.system)?;
    }
    out.flush()?;

    outcome.context("simulation halted")?;
    Ok(())
}
