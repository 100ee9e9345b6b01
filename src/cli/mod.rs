//! Command-line parsing for the Foster→Cauer converter.
//!
//! Argument parsing and command dispatch stay separate from the
//! modeling/math code; this module only describes the interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{
    FitConfig, Order, DEFAULT_C_MAX, DEFAULT_MAX_ITERATIONS, DEFAULT_R_MAX,
};
use crate::error::Result;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "f2c",
    version,
    about = "Generate Cauer RC model component values from a Zth vs. time CSV file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a Foster model and synthesize the equivalent Cauer ladder;
    /// prints SPICE `.param` lines.
    Cauer(FitArgs),
    /// Fit a Foster model only; prints the fitted branches and fit quality.
    Foster(FitArgs),
}

/// Common options for both commands.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// CSV file containing Zth [K/W] vs. time [s] data (time first).
    pub csv: PathBuf,

    /// How many RC pairs to generate (3, 4 or 5).
    #[arg(short = 'n', long, default_value_t = 4)]
    pub order: usize,

    /// Maximum value for any R in the model.
    #[arg(long, default_value_t = DEFAULT_R_MAX)]
    pub r_max: f64,

    /// Maximum value for any C in the model.
    #[arg(long, default_value_t = DEFAULT_C_MAX)]
    pub c_max: f64,

    /// Iteration cap for the curve-fit optimizer.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Skip one header row at the top of the CSV.
    #[arg(long)]
    pub header: bool,

    /// Write the `.param` lines to a SPICE include file as well.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl FitArgs {
    /// Validate the numeric arguments into a [`FitConfig`].
    pub fn fit_config(&self) -> Result<FitConfig> {
        let mut config = FitConfig::new(Order::new(self.order)?, self.r_max, self.c_max);
        config.max_iterations = self.max_iterations;
        Ok(config)
    }
}
