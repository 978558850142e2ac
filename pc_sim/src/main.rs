//! Console simulator for the Pour Combien round controller.
//!
//! Reads button presses from a script (or stdin), one line per tick, and
//! prints what the round does in response.

mod config;
mod script;
mod sim;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Error};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;

use crate::{
    config::{CliOverrides, SimConfig},
    script::Script,
    sim::Simulator,
};

const HELP: &str = "\
Simulate Pour Combien rounds from a tick script

USAGE:
  pc_sim [OPTIONS]

OPTIONS:
  --script     PATH        Tick script to play  [default: read stdin]
  --frames     N           Animation length for every phase  [default: env PC_ANIMATION_FRAMES or 30]
  --max-ticks  N           Stop after N ticks  [default: env PC_MAX_TICKS or unlimited]
  --tick-ms    N           Pause between ticks in milliseconds  [default: env PC_TICK_MS or 0]

FLAGS:
  --headless               Run without animations
  --json                   Print one JSON report per tick
  -h, --help               Print help information

SCRIPT:
  One line per tick. '+' / '+N' increment, '-' / '-N' decrement,
  'v' validate, 'wait N' idles N ticks, '#' starts a comment.

ENVIRONMENT:
  PC_ANIMATION_FRAMES      Animation length for every phase
  PC_HEADLESS              Run without animations (true/false)
  PC_MAX_TICKS             Tick budget
  PC_TICK_MS               Pause between ticks
";

struct Args {
    script: Option<PathBuf>,
    overrides: CliOverrides,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        script: pargs.opt_value_from_str("--script")?,
        overrides: CliOverrides {
            frames: pargs.opt_value_from_str("--frames")?,
            tick_ms: pargs.opt_value_from_str("--tick-ms")?,
            max_ticks: pargs.opt_value_from_str("--max-ticks")?,
            headless: pargs.contains("--headless"),
            json: pargs.contains("--json"),
        },
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("unexpected arguments: {remaining:?}");
    }

    let config = SimConfig::from_env(args.overrides)?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            info!("Playing script {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading ticks from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let mut simulator = Simulator::new(config);
    let mut stdout = io::stdout().lock();
    simulator.run(Script::new(reader), &mut stdout)?;

    info!(
        "Stopped after {} ticks and {} rounds, {}",
        simulator.ticks(),
        simulator.rounds(),
        simulator.view()
    );
    Ok(())
}
