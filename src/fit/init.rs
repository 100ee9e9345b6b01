//! Initial parameter guesses for the exponential-sum fit.
//!
//! The optimizer needs a starting point strictly inside the box
//! constraints. We derive one from the data instead of a fixed constant:
//!
//! - the measured curve saturates near `Σ R_i`, so every `R_i` starts at
//!   `max(response)/N`
//! - time constants start log-spaced across the sampled time range, so the
//!   initial branches cover fast and slow poles alike
//! - `C_i = τ_i / R_i` ties the two together

use crate::domain::Sample;
use crate::error::{Error, Result};

/// Fraction of the box kept as a margin when clamping a guess inside it.
const BOX_MARGIN: f64 = 1e-6;

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub(crate) fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > min) {
        return Err(Error::InvalidInput(format!(
            "invalid log-space range: min={min}, max={max} (must be finite, >0, and max>min)"
        )));
    }
    if steps < 2 {
        return Err(Error::InvalidInput("log-space steps must be >= 2".to_string()));
    }

    let ln_min = min.ln();
    let step = (max.ln() - ln_min) / (steps as f64 - 1.0);
    Ok((0..steps).map(|i| (ln_min + step * i as f64).exp()).collect())
}

/// Initial parameter vector `[R_1..R_N, C_1..C_N]`, clamped strictly inside
/// the box `[0, r_max] × [0, c_max]`.
pub(crate) fn initial_guesses(
    samples: &[Sample],
    order: usize,
    r_max: f64,
    c_max: f64,
) -> Result<Vec<f64>> {
    let y_max = samples.iter().map(|s| s.response).fold(0.0, f64::max);

    // Time-constant seeds spanning the measured window. Samples at t = 0
    // carry no time-constant information, so the range starts at the
    // smallest positive time.
    let t_min = samples
        .iter()
        .map(|s| s.time)
        .filter(|&t| t > 0.0)
        .fold(f64::INFINITY, f64::min);
    let t_max = samples.iter().map(|s| s.time).fold(0.0, f64::max);
    let (lo, hi) = if t_min.is_finite() && t_max > t_min {
        (t_min, t_max)
    } else {
        // Degenerate time axis (single instant); any interior seed works.
        (1e-3, 1.0)
    };
    let taus = log_space(lo, hi, order)?;

    let clamp = |v: f64, bound: f64| v.clamp(bound * BOX_MARGIN, bound * (1.0 - BOX_MARGIN));

    let r0 = clamp(y_max / order as f64, r_max);
    let mut params = vec![r0; order];
    params.extend(taus.iter().map(|tau| clamp(tau / r0, c_max)));
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn log_space_includes_endpoints() {
        let v = log_space(0.1, 10.0, 5).unwrap();
        assert_relative_eq!(v[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(v[v.len() - 1], 10.0, max_relative = 1e-12);
    }

    #[test]
    fn log_space_rejects_bad_ranges() {
        assert!(log_space(0.0, 1.0, 3).is_err());
        assert!(log_space(1.0, 1.0, 3).is_err());
        assert!(log_space(0.1, 10.0, 1).is_err());
    }

    #[test]
    fn guesses_stay_inside_the_box() {
        let samples: Vec<Sample> = (0..50)
            .map(|i| Sample {
                time: i as f64 * 0.1,
                response: 2.0 * (1.0 - (-(i as f64) * 0.1).exp()),
            })
            .collect();
        let params = initial_guesses(&samples, 4, 1.0, 10.0).unwrap();
        assert_eq!(params.len(), 8);
        for &r in &params[..4] {
            assert!(r > 0.0 && r < 1.0);
        }
        for &c in &params[4..] {
            assert!(c > 0.0 && c < 10.0);
        }
    }
}
