//! Command-line entry point for dataset generation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use namegen::constants::dataset::{
    DEFAULT_OUTPUT_PATH, DEFAULT_TARGET_SIZE, DUPLICATE_STREAK_LIMIT,
};
use namegen::{DatasetBuilder, GeneratorConfig};

#[derive(Debug, Parser)]
#[command(
    name = "namegen",
    disable_help_subcommand = true,
    about = "Generate a synthetic filename-stem training dataset",
    long_about = "Compose category terms with dates, versions, companies, and other modifiers \
                  into a target-sized set of unique filename stems, sorted and written as \
                  single-column CSV.",
    after_help = "The output directory must already exist. Omit --seed for a fresh dataset each run."
)]
struct Cli {
    #[arg(
        long,
        default_value_t = DEFAULT_TARGET_SIZE,
        help = "Number of unique filename stems to generate"
    )]
    target_size: usize,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH,
        help = "Destination CSV path"
    )]
    output: PathBuf,
    #[arg(long, help = "RNG seed for reproducible datasets")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = DUPLICATE_STREAK_LIMIT,
        help = "Consecutive duplicates treated as an unreachable target"
    )]
    streak_limit: usize,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let config = GeneratorConfig {
        seed: cli.seed,
        target_size: cli.target_size,
        output_path: cli.output,
        duplicate_streak_limit: cli.streak_limit,
        ..GeneratorConfig::default()
    };

    println!("Generating {} filenames...", config.target_size);
    match DatasetBuilder::new(config).and_then(|builder| builder.run()) {
        Ok(summary) => {
            println!("Dataset generated successfully!");
            println!("Total filenames: {}", summary.records);
            println!("Saved to: {}", summary.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
