//! Command-line runner for the `smoothlife` simulation engine.
//!
//! Builds a [`smoothlife::Ruleset`] from the positional ruleset grammar,
//! spawns the compute thread (the step driver's loop) and a minimal
//! built-in consumer thread that pops fields and prints a periodic
//! throughput line.

mod ruleset_cli;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;

use ruleset_cli::Outcome;
use smoothlife::{init, Field, StepDriver};

/// Outer flags the positional ruleset grammar doesn't cover.
#[derive(Parser)]
#[command(name = "smoothlife")]
#[command(about = "SmoothLife simulation engine runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of generations to run before exiting.
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// PRNG seed for the random/splat/propagate initializers.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Initial-condition generator.
    #[arg(long, value_enum, default_value_t = Init::Random)]
    init: Init,

    /// Ring buffer queue capacity between the compute and consumer threads.
    #[arg(long, default_value_t = 4)]
    queue: usize,

    /// `<preset>|new|help [W H ra rr b1 b2 d1 d2 alpha_m alpha_n dt discrete]`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    ruleset: Vec<String>,
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum Init {
    Uniform,
    Random,
    Splat,
    Propagate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = match ruleset_cli::parse(&cli.ruleset)? {
        Outcome::Help => {
            println!("{}", ruleset_cli::USAGE);
            return Ok(());
        }
        Outcome::Built(r) => r,
    };

    let width = rules.width();
    let height = rules.height();

    let initial = match cli.init {
        Init::Uniform => init::uniform(width, height, 0.5),
        Init::Random => init::random(width, height, cli.seed),
        Init::Splat => init::splat(width, height, cli.seed, rules.ra()),
        Init::Propagate => init::propagate(width, height, cli.seed),
    };

    let mut driver = StepDriver::new(&rules, cli.queue, initial);
    let (ring, mut compute) = driver.split();
    let steps = cli.steps;

    std::thread::scope(|scope| {
        scope.spawn(move || {
            let start = Instant::now();
            let mut completed = 0_u64;
            while completed < steps {
                if compute.step(ring) {
                    completed += 1;
                }
            }
            let elapsed = start.elapsed();
            let rate = completed as f64 / elapsed.as_secs_f64();
            println!("{completed} generations in {elapsed:?} ({rate:.1} generations / s)");
        });

        scope.spawn(move || {
            let mut dst = Field::zeros(width, height);
            let mut popped = 0_u64;
            let mut last_report = Instant::now();
            while popped < steps {
                if ring.pop(&mut dst) {
                    popped += 1;
                    if last_report.elapsed() >= Duration::from_secs(1) {
                        println!("consumed {popped} frames, field sum {:.3}", dst.sum());
                        last_report = Instant::now();
                    }
                }
            }
        });
    });

    Ok(())
}
