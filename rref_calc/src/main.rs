use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use rref_calc::presets::{random_matrix, Preset};
use rref_calc::{parse_matrix, Calculation, CalculationOptions, Matrix, NumberFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Gauss-Jordan elimination calculator", long_about = None)]
struct Args {
    /// Matrix file, one row per line; `-` reads stdin.
    #[arg(short, long, conflicts_with_all = ["preset", "random"])]
    pub input: Option<PathBuf>,

    /// Built-in example, e.g. `simple-system` or `invertible-3x3`.
    #[arg(short, long, conflicts_with = "random")]
    pub preset: Option<Preset>,

    /// Fill a `--rows` x `--cols` matrix with random integers.
    #[arg(long)]
    pub random: bool,

    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    #[arg(long, default_value_t = 4)]
    pub cols: usize,

    /// Last column is the right-hand side. Presets carry their own setting.
    #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
    pub augmented: bool,

    /// Show values as fractions.
    #[arg(short, long)]
    pub fractions: bool,

    /// Print every row operation.
    #[arg(short, long)]
    pub steps: bool,

    #[arg(long)]
    pub json: Option<PathBuf>,

    #[arg(long)]
    pub csv: Option<PathBuf>,
}

fn read_input(args: &Args) -> Result<(Matrix, bool)> {
    if let Some(preset) = args.preset {
        log::debug!("using preset {}", preset.title());
        return Ok((preset.matrix()?, preset.is_augmented()));
    }
    if args.random {
        let matrix = random_matrix(args.rows, args.cols, &mut rand::thread_rng())
            .context("generating random matrix")?;
        return Ok((matrix, args.augmented));
    }
    let Some(path) = &args.input else {
        bail!("no matrix given, use --input, --preset or --random");
    };
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading matrix from stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    let matrix = parse_matrix(&text).context("parsing matrix")?;
    Ok((matrix, args.augmented))
}

fn run(args: Args) -> Result<()> {
    let (matrix, is_augmented) = read_input(&args)?;
    let format = NumberFormat::from_fraction_flag(args.fractions);
    println!("Input Matrix:\n{matrix}\n");
    let calculation = Calculation::run(
        matrix,
        CalculationOptions {
            is_augmented,
            format,
        },
    );
    for line in calculation.report(format, args.steps) {
        println!("{line}");
    }
    if let Some(path) = &args.json {
        fs::write(path, calculation.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    if let Some(path) = &args.csv {
        fs::write(path, calculation.rref_csv())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(args) {
        eprintln!("calculation failed: {err:?}");
        process::exit(1)
    }
}
