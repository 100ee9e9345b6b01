//! Value types shared across the pipeline.
//!
//! These are intentionally lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and synthesis
//! - exported for downstream tooling (SPICE decks, comparison scripts)
//!
//! All of them are constructed once and never mutated afterwards.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ORDER_MAX, ORDER_MIN};

/// Default upper bound for every fitted R parameter (Ohms or K/W).
pub const DEFAULT_R_MAX: f64 = 1_000.0;
/// Default upper bound for every fitted C parameter (Farads or J/K).
pub const DEFAULT_C_MAX: f64 = 1_000.0;
/// Default iteration cap for the least-squares optimizer.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// One measured point of the step-response curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time since the power step was applied, in seconds. Non-negative.
    pub time: f64,
    /// Measured response (e.g. thermal impedance Zth in K/W). Non-negative.
    pub response: f64,
}

/// Number of RC pairs in either ladder representation.
///
/// Only orders 3..=5 are supported; the constructor is the single place this
/// is enforced, so holding an `Order` means the range check already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(usize);

impl Order {
    /// Validate and wrap a ladder order.
    pub fn new(order: usize) -> Result<Self> {
        if (ORDER_MIN..=ORDER_MAX).contains(&order) {
            Ok(Self(order))
        } else {
            Err(Error::InvalidOrder { order })
        }
    }

    /// The underlying order value.
    pub fn get(self) -> usize {
        self.0
    }
}

/// One parallel branch of a Foster network: a resistor in series with a
/// capacitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FosterBranch {
    pub r: f64,
    pub c: f64,
}

impl FosterBranch {
    /// Time constant `τ = R·C` of this branch.
    pub fn tau(&self) -> f64 {
        self.r * self.c
    }
}

/// A Foster ladder: N parallel series-RC branches whose combined step
/// response approximates the measured curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FosterLadder {
    branches: Vec<FosterBranch>,
}

impl FosterLadder {
    /// Wrap fitted branches. The caller guarantees the branch count matches
    /// a supported order; this is re-checked where it matters (synthesis).
    pub fn new(branches: Vec<FosterBranch>) -> Self {
        Self { branches }
    }

    pub fn order(&self) -> usize {
        self.branches.len()
    }

    pub fn branches(&self) -> &[FosterBranch] {
        &self.branches
    }

    /// Step response of the ladder at time `t`:
    /// `Σ R_i · (1 − exp(−t / (R_i·C_i)))`.
    ///
    /// A branch with `τ = 0` responds instantaneously: it contributes its
    /// full `R` for `t > 0` and nothing at `t = 0`.
    pub fn response_at(&self, t: f64) -> f64 {
        self.branches
            .iter()
            .map(|b| {
                let tau = b.tau();
                if tau > 0.0 {
                    b.r * (1.0 - (-t / tau).exp())
                } else if t > 0.0 {
                    b.r
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Driving-point impedance `Z(s) = Σ R_i / (1 + s·R_i·C_i)`.
    pub fn impedance_at(&self, s: Complex64) -> Complex64 {
        self.branches
            .iter()
            .map(|b| b.r / (1.0 + s * b.tau()))
            .sum()
    }
}

/// One stage of a Cauer ladder: a shunt capacitor followed by a series
/// resistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CauerStage {
    pub c: f64,
    pub r: f64,
}

/// A Cauer ladder: alternating shunt-C / series-R stages, equivalent in
/// driving-point impedance to the Foster ladder it was synthesized from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauerLadder {
    stages: Vec<CauerStage>,
}

impl CauerLadder {
    pub fn new(stages: Vec<CauerStage>) -> Self {
        Self { stages }
    }

    pub fn order(&self) -> usize {
        self.stages.len()
    }

    pub fn stages(&self) -> &[CauerStage] {
        &self.stages
    }

    /// Component values in extraction order, labeled `C1, R1, C2, R2, ...`.
    pub fn labeled(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.stages.iter().enumerate().flat_map(|(i, stage)| {
            [
                (format!("C{}", i + 1), stage.c),
                (format!("R{}", i + 1), stage.r),
            ]
        })
    }

    /// Driving-point impedance of the ladder by composition from the far
    /// end: `Z = 1/(sC1 + 1/(R1 + 1/(sC2 + … + 1/R_N)))`.
    pub fn impedance_at(&self, s: Complex64) -> Complex64 {
        let mut z = Complex64::new(0.0, 0.0);
        for stage in self.stages.iter().rev() {
            z = 1.0 / (s * stage.c + 1.0 / (stage.r + z));
        }
        z
    }
}

/// Configuration for one fit-and-synthesize run.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Number of RC pairs to fit.
    pub order: Order,
    /// Upper bound applied to every R parameter (lower bound is 0).
    pub r_max: f64,
    /// Upper bound applied to every C parameter (lower bound is 0).
    pub c_max: f64,
    /// Iteration cap for the Levenberg-Marquardt optimizer.
    pub max_iterations: usize,
}

impl FitConfig {
    /// Config with the given bounds and the default iteration cap.
    pub fn new(order: Order, r_max: f64, c_max: f64) -> Self {
        Self {
            order,
            r_max,
            c_max,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
