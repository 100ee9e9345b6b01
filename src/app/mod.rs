//! Command dispatch: wire CLI arguments into the fit/synthesis pipeline.

pub mod pipeline;

use clap::Parser;

use crate::cli::{Cli, Command, FitArgs};
use crate::error::Result;
use crate::io::{read_samples, write_param_file};
use crate::report::{format_cauer_params, format_foster};

/// Entry point used by the `f2c` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Cauer(args) => run_cauer(&args),
        Command::Foster(args) => run_foster(&args),
    }
}

fn run_cauer(args: &FitArgs) -> Result<()> {
    // Order/bound problems are reported before the CSV is even opened.
    let config = args.fit_config()?;
    let samples = read_samples(&args.csv, args.header)?;
    let out = pipeline::run_fit(&samples, &config)?;

    let params = format_cauer_params(&out.cauer);
    print!("{params}");
    eprintln!("fit RMSE: {:.6e}", out.rmse);

    if let Some(path) = &args.export {
        write_param_file(path, &out.cauer)?;
    }
    Ok(())
}

fn run_foster(args: &FitArgs) -> Result<()> {
    let config = args.fit_config()?;
    let samples = read_samples(&args.csv, args.header)?;
    let foster = crate::fit::fit_foster(&samples, &config)?;
    let rmse = pipeline::fit_rmse(&samples, &foster);
    print!("{}", format_foster(&foster, rmse));
    Ok(())
}
