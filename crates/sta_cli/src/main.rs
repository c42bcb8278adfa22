//! Sta CLI — the command-line interface for the static timing analyzer.
//!
//! Provides `sta analyze` to parse a restricted-Verilog netlist, run forward/
//! backward timing propagation, and report slack and critical paths.

#![warn(missing_docs)]

mod analyze;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Sta — a static timing analyzer for a restricted Verilog subset.
#[derive(Parser, Debug)]
#[command(name = "sta", version, about = "Static timing analysis")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run timing analysis on a netlist.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `sta analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the restricted-Verilog netlist file.
    pub netlist: String,

    /// Clock period, in seconds.
    #[arg(long)]
    pub tclk: f64,

    /// Setup time, in seconds.
    #[arg(long, default_value_t = 0.05)]
    pub setup: f64,

    /// Clock-to-Q delay, in seconds.
    #[arg(long = "clock-to-q", default_value_t = 0.0)]
    pub clock_to_q: f64,

    /// Number of edge-disjoint critical paths to extract.
    #[arg(long, default_value_t = 1)]
    pub k: usize,

    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Print a delay-distribution histogram of the parsed netlist before
    /// running timing analysis.
    #[arg(long)]
    pub stats: bool,
}

/// Diagnostic and report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::env::var("TERM").is_ok(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
    };

    let result = match cli.command {
        Command::Analyze(ref args) => analyze::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
