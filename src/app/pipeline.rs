//! The full Foster→Cauer pipeline in one place, so the CLI commands (and
//! any future front-end) only deal with presentation.
//!
//! Flow: samples → ExponentialFitter → ImpedanceBuilder → CauerSynthesizer.

use crate::domain::{CauerLadder, FitConfig, FosterLadder, Sample};
use crate::error::Result;
use crate::fit::fit_foster;
use crate::synth::{build_impedance, synthesize, RationalFunction};

/// All computed outputs of a single fit-and-synthesize run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub foster: FosterLadder,
    pub zin: RationalFunction,
    pub cauer: CauerLadder,
    /// RMSE between the fitted Foster model and the measured samples.
    pub rmse: f64,
}

/// Execute the full pipeline: fit, combine, expand.
pub fn run_fit(samples: &[Sample], config: &FitConfig) -> Result<RunOutput> {
    let foster = fit_foster(samples, config)?;
    let zin = build_impedance(&foster)?;
    let cauer = synthesize(&zin)?;
    let rmse = fit_rmse(samples, &foster);
    Ok(RunOutput {
        foster,
        zin,
        cauer,
        rmse,
    })
}

/// Convert an already-fitted Foster ladder without refitting.
pub fn foster_to_cauer(ladder: &FosterLadder) -> Result<CauerLadder> {
    synthesize(&build_impedance(ladder)?)
}

/// Root-mean-square error of the ladder's step response over the samples.
pub fn fit_rmse(samples: &[Sample], ladder: &FosterLadder) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sse: f64 = samples
        .iter()
        .map(|s| {
            let r = ladder.response_at(s.time) - s.response;
            r * r
        })
        .sum();
    (sse / samples.len() as f64).sqrt()
}
