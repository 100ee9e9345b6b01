//! Bounded nonlinear least-squares fit of the Foster step-response model.
//!
//! The model for order N is a single parameterized summation (one closed
//! form for every supported order, not one hand-written expression per
//! order):
//!
//! ```text
//! f(t; R_1..R_N, C_1..C_N) = Σ R_i · (1 − exp(−t / (R_i·C_i)))
//! ```
//!
//! The box constraints `[0, r_max]` / `[0, c_max]` are enforced through a
//! logistic reparameterization: the optimizer works on unconstrained
//! variables `u`, and every physical parameter is `θ = bound·σ(u)`, which
//! keeps each iterate strictly inside its box. The analytic Jacobian picks
//! up the chain-rule factor `dθ/du = θ·(1 − θ/bound)`.

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt, TerminationReason};
use nalgebra::{DMatrix, DVector, Dyn, Owned};

use crate::domain::{FitConfig, FosterBranch, FosterLadder, Sample};
use crate::error::{Error, Result};
use crate::fit::initial_guesses;

/// Fit a Foster ladder of `config.order` branches to the measured samples.
///
/// Fails with [`Error::InvalidInput`] on empty or non-finite data and with
/// [`Error::FitFailure`] when the optimizer exhausts its iteration budget
/// or hits a numerical dead end. No retries happen here; callers that want
/// retries can vary the bounds or the sample window and call again.
pub fn fit_foster(samples: &[Sample], config: &FitConfig) -> Result<FosterLadder> {
    validate_samples(samples)?;
    validate_bounds(config)?;

    let order = config.order.get();
    let theta0 = initial_guesses(samples, order, config.r_max, config.c_max)?;
    let problem = FosterProblem::new(samples, order, config.r_max, config.c_max, &theta0);

    let (solved, report) = LevenbergMarquardt::new()
        .with_patience(config.max_iterations)
        .minimize(problem);

    match report.termination {
        TerminationReason::LostPatience => {
            return Err(Error::FitFailure {
                reason: format!("iteration cap of {} reached", config.max_iterations),
                residual: report.objective_function,
            });
        }
        TerminationReason::Numerical(s) => {
            return Err(Error::FitFailure {
                reason: format!("numerical problem: {s}"),
                residual: report.objective_function,
            });
        }
        ref t if !t.was_successful() => {
            return Err(Error::FitFailure {
                reason: format!("{t:?}"),
                residual: report.objective_function,
            });
        }
        _ => {}
    }

    let thetas = solved.thetas();
    let mut branches: Vec<FosterBranch> = (0..order)
        .map(|i| FosterBranch {
            r: thetas[i],
            c: thetas[order + i],
        })
        .collect();
    // Deterministic output: order branches by ascending time constant.
    branches.sort_by(|a, b| a.tau().total_cmp(&b.tau()));
    Ok(FosterLadder::new(branches))
}

fn validate_samples(samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::InvalidInput("no samples provided".to_string()));
    }
    for (i, s) in samples.iter().enumerate() {
        if !s.time.is_finite() || s.time < 0.0 {
            return Err(Error::InvalidInput(format!(
                "sample {} has invalid time {} (must be finite and >= 0)",
                i + 1,
                s.time
            )));
        }
        if !s.response.is_finite() || s.response < 0.0 {
            return Err(Error::InvalidInput(format!(
                "sample {} has invalid response {} (must be finite and >= 0)",
                i + 1,
                s.response
            )));
        }
    }
    Ok(())
}

fn validate_bounds(config: &FitConfig) -> Result<()> {
    for (name, bound) in [("r_max", config.r_max), ("c_max", config.c_max)] {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "{name} must be positive and finite, got {bound}"
            )));
        }
    }
    Ok(())
}

fn sigmoid(u: f64) -> f64 {
    1.0 / (1.0 + (-u).exp())
}

fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Least-squares problem over the unconstrained variables `u`.
///
/// m = number of samples, n = 2·order parameters (`R_1..R_N, C_1..C_N`).
struct FosterProblem {
    times: Vec<f64>,
    responses: Vec<f64>,
    /// Per-parameter upper bound: `r_max` for the first N entries, `c_max`
    /// for the rest.
    bounds: Vec<f64>,
    order: usize,
    u: DVector<f64>,
}

impl FosterProblem {
    fn new(samples: &[Sample], order: usize, r_max: f64, c_max: f64, theta0: &[f64]) -> Self {
        let mut bounds = vec![r_max; order];
        bounds.extend(std::iter::repeat(c_max).take(order));
        let u = DVector::from_iterator(
            theta0.len(),
            theta0.iter().zip(&bounds).map(|(&t, &b)| logit(t / b)),
        );
        Self {
            times: samples.iter().map(|s| s.time).collect(),
            responses: samples.iter().map(|s| s.response).collect(),
            bounds,
            order,
            u,
        }
    }

    /// Physical parameters implied by the current `u`.
    fn thetas(&self) -> Vec<f64> {
        self.u
            .iter()
            .zip(&self.bounds)
            .map(|(&u, &b)| b * sigmoid(u))
            .collect()
    }

    fn model_at(&self, t: f64, thetas: &[f64]) -> f64 {
        (0..self.order)
            .map(|i| {
                let (r, c) = (thetas[i], thetas[self.order + i]);
                r * (1.0 - (-t / (r * c)).exp())
            })
            .sum()
    }
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for FosterProblem {
    type ParameterStorage = Owned<f64, Dyn>;
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;

    fn set_params(&mut self, x: &nalgebra::Vector<f64, Dyn, Self::ParameterStorage>) {
        self.u.copy_from(x);
    }

    fn params(&self) -> nalgebra::Vector<f64, Dyn, Self::ParameterStorage> {
        self.u.clone()
    }

    fn residuals(&self) -> Option<nalgebra::Vector<f64, Dyn, Self::ResidualStorage>> {
        let thetas = self.thetas();
        Some(DVector::from_iterator(
            self.times.len(),
            self.times
                .iter()
                .zip(&self.responses)
                .map(|(&t, &y)| self.model_at(t, &thetas) - y),
        ))
    }

    fn jacobian(&self) -> Option<nalgebra::Matrix<f64, Dyn, Dyn, Self::JacobianStorage>> {
        let thetas = self.thetas();
        let n_params = 2 * self.order;
        let mut jac = DMatrix::zeros(self.times.len(), n_params);

        for (row, &t) in self.times.iter().enumerate() {
            for i in 0..self.order {
                let (r, c) = (thetas[i], thetas[self.order + i]);
                let x = t / (r * c);
                let e = (-x).exp();
                // x·e^(−x) underflows to a clean 0 at saturation, but only
                // if the indeterminate inf·0 case is caught.
                let xe = if x.is_finite() { x * e } else { 0.0 };

                // ∂f/∂R_i and ∂f/∂C_i of the summation term.
                let df_dr = (1.0 - e) - xe;
                let df_dc = -xe * r / c;

                // Chain rule through θ = bound·σ(u).
                let dr_du = r * (1.0 - r / self.bounds[i]);
                let dc_du = c * (1.0 - c / self.bounds[self.order + i]);
                jac[(row, i)] = df_dr * dr_du;
                jac[(row, self.order + i)] = df_dc * dc_du;
            }
        }
        Some(jac)
    }
}
