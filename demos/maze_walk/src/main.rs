//! maze_walk — run one navigation session on the reference maze.
//!
//! ```text
//! maze_walk [--config session.json] [--layout maze.csv] [--random SEED] [--out DIR]
//! ```
//!
//! Without `--random` the agent follows a fixed route from the start cell to
//! the goal.  With it, a seeded random policy explores until the cycle or
//! frame limit.  A `--layout` CSV (`1` = wall, `0` = open) replaces the maze
//! but keeps the reference start and goal cells.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use mz_core::Action;
use mz_encode::render_ascii;
use mz_grid::{GridLayout, load_layout_csv};
use mz_output::{CsvWriter, OutputWriter, TraceObserver};
use mz_session::{
    DecisionPolicy, RandomPolicy, ScriptedPolicy, Session, SessionBuilder, SessionConfig,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUT:       &str = "output/maze_walk";
const RANDOM_MAX_CYCLES: u32  = 200;
const POSE_INTERVAL:     u64  = 6; // 10 pose rows per simulated second at 60 fps

/// Start (6, 5) → goal (1, 1) on the reference maze.
const ROUTE: [Action; 13] = [
    Action::MoveForward,
    Action::MoveForward,
    Action::TurnLeft,
    Action::MoveForward,
    Action::MoveForward,
    Action::MoveForward,
    Action::TurnRight,
    Action::MoveForward,
    Action::MoveForward,
    Action::TurnLeft,
    Action::MoveForward,
    Action::MoveForward,
    Action::Stop,
];

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    layout: Option<PathBuf>,
    seed:   Option<u64>,
    out:    Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().with_context(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--config" => args.config = Some(value()?.into()),
            "--layout" => args.layout = Some(value()?.into()),
            "--random" => args.seed = Some(value()?.parse().context("--random expects an integer seed")?),
            "--out"    => args.out = Some(value()?.into()),
            other      => bail!("unknown argument {other:?}"),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    if args.seed.is_some() && config.max_cycles.is_none() {
        config.max_cycles = Some(RANDOM_MAX_CYCLES);
    }
    Ok(config)
}

fn load_layout(args: &Args, cell_size: f32) -> Result<Option<GridLayout>> {
    let Some(path) = &args.layout else {
        return Ok(None);
    };
    let reference = GridLayout::reference();
    let layout = load_layout_csv(path, reference.start(), reference.goal(), cell_size)
        .with_context(|| format!("loading layout {}", path.display()))?;
    Ok(Some(layout))
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run<P: DecisionPolicy, W: OutputWriter>(
    mut session: Session<P>,
    obs:         &mut TraceObserver<W>,
) -> Result<Session<P>> {
    let t0  = Instant::now();
    let end = session.run(obs)?;
    info!(?end, elapsed_ms = t0.elapsed().as_millis() as u64, "run finished");

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "trace output incomplete");
    }
    Ok(session)
}

fn report<P: DecisionPolicy>(session: &Session<P>) {
    println!();
    println!("Frames     : {}", session.clock().current_frame.0);
    println!("Sim time   : {:.2} s", session.clock().elapsed_secs);
    println!("Decisions  : {}", session.cycles());
    println!("Visited    : {} cells", session.map().visited().len());
    println!("Trail      : {} samples", session.positions().len());
    println!("Ended      : {:?}", session.ended());
    println!("At goal    : {}", if session.at_goal() { "yes" } else { "no" });
    println!();
    println!("{}", render_ascii(session.map(), &session.state()));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args   = parse_args()?;
    let config = load_config(&args)?;
    let layout = load_layout(&args, config.nav.cell_size)?;

    println!("=== maze_walk ===");
    match args.seed {
        Some(seed) => println!("Policy: random (seed {seed})"),
        None       => println!("Policy: scripted route ({} steps)", ROUTE.len()),
    }

    let out = args.out.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    let writer  = CsvWriter::new(&out)?;
    let mut obs = TraceObserver::new(writer).with_pose_interval(POSE_INTERVAL);

    match args.seed {
        Some(seed) => {
            let mut builder = SessionBuilder::new(config, RandomPolicy::new(seed));
            if let Some(layout) = layout {
                builder = builder.layout(layout);
            }
            let session = run(builder.build()?, &mut obs)?;
            report(&session);
        }
        None => {
            let mut builder = SessionBuilder::new(config, ScriptedPolicy::from_actions(ROUTE));
            if let Some(layout) = layout {
                builder = builder.layout(layout);
            }
            let session = run(builder.build()?, &mut obs)?;
            report(&session);
        }
    }

    if obs.policy_errors() > 0 {
        println!("Policy errors: {}", obs.policy_errors());
    }
    println!("Trace written to {}", out.display());
    Ok(())
}
