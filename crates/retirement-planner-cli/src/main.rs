mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::retirement::{PlanArgs, ProjectionArgs};
use commands::scenarios::SensitivityArgs;

/// Retirement savings projections
#[derive(Parser)]
#[command(
    name = "retire",
    version,
    about = "Retirement savings projections",
    long_about = "Project retirement savings with decimal precision: balance at retirement, \
                  4% safe withdrawal, depletion horizon, shortfall remedies, and \
                  sensitivity sweeps over any numeric plan input."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full retirement plan (summary, projection, recommendations)
    Plan(PlanArgs),
    /// Print only the year-by-year savings projection
    Projection(ProjectionArgs),
    /// Sweep one or two plan inputs and report a plan metric
    Sensitivity(SensitivityArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Plan(args) => commands::retirement::run_plan(args),
        Commands::Projection(args) => commands::retirement::run_projection(args),
        Commands::Sensitivity(args) => commands::scenarios::run_sensitivity(args),
        Commands::Version => {
            println!("retire {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
