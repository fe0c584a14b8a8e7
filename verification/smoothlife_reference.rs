//! Scalar, single-threaded, unvectorized reference runner.
//!
//! Runs the engine's scalar kernel oracle (`smoothlife::kernel::reference`)
//! for a fixed seed and step count and prints the field-sum time series to
//! stdout, one value per line, so it can be diffed against a stored
//! reference vector to catch any drift in the optimized kernel.
//!
//! Deliberately never touches the optimized kernel, the mask-offset
//! family, or `rayon`: this binary exists only as a slow, trustworthy
//! cross-check, not as a usable simulation runner.

use anyhow::Result;
use clap::Parser;

use smoothlife::kernel::reference::fill_unoptimized;
use smoothlife::{init, Field, Mask, MaskFamily, Ruleset};

#[derive(Parser)]
#[command(name = "smoothlife_reference")]
#[command(about = "Scalar single-threaded reference runner for cross-checking the optimized engine")]
struct Cli {
    /// Field width and height (square field).
    #[arg(long, default_value_t = 128)]
    size: usize,

    /// Number of generations to run.
    #[arg(long, default_value_t = 500)]
    steps: u64,

    /// PRNG seed for the initial random field.
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,

    /// Ruleset preset: `L` or `rafler_paper`.
    #[arg(long, default_value = "L")]
    preset: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = match cli.preset.as_str() {
        "rafler_paper" => Ruleset::rafler_paper(cli.size, cli.size),
        _ => Ruleset::smooth_life_l(cli.size, cli.size),
    };

    let annulus = MaskFamily::annulus(rules.ra(), rules.ri());
    let inner_disk = MaskFamily::inner_disk(rules.ra(), rules.ri());
    let annulus_mask = annulus.variant(0);
    let inner_mask = inner_disk.variant(0);

    let mut read = init::random(rules.width(), rules.height(), cli.seed);
    let mut write = Field::zeros(rules.width(), rules.height());

    println!("{:.6}", read.sum());
    for _ in 0..cli.steps {
        step_scalar(&read, &mut write, &rules, annulus_mask, inner_mask);
        std::mem::swap(&mut read, &mut write);
        println!("{:.6}", read.sum());
    }

    Ok(())
}

/// One generation, computed entirely through the scalar reference kernel.
fn step_scalar(read: &Field, write: &mut Field, rules: &Ruleset, annulus: &Mask, inner_disk: &Mask) {
    for y in 0..read.height() {
        for x in 0..read.width() {
            let n = fill_unoptimized(read, x, y, annulus);
            let m = fill_unoptimized(read, x, y, inner_disk);
            let value = f64::from(read.get(x, y));
            let next = if rules.discrete() {
                smoothlife::discrete_step(n, m, rules.b1(), rules.b2(), rules.d1(), rules.d2())
            } else {
                smoothlife::euler_step(
                    value,
                    n,
                    m,
                    rules.b1(),
                    rules.b2(),
                    rules.d1(),
                    rules.d2(),
                    rules.alpha_m(),
                    rules.alpha_n(),
                    rules.dt(),
                )
            };
            write.set(x, y, next as f32);
        }
    }
}
