//! Cauer synthesis: continued-fraction expansion of a rational impedance.
//!
//! Each ladder stage peels one pole off the impedance by alternating between
//! the admittance and impedance views:
//!
//! ```text
//! 1/Z(s) = s·C_i + Y_i(s)        (shunt capacitance from the leading ratio)
//! 1/Y_i(s) = R_i + Z_{i+1}(s)    (series resistance from the leading ratio)
//! ```
//!
//! which is Euclidean polynomial division, two half-steps per stage. The
//! whole expansion runs on exact rational coefficients, so the "leading
//! coefficient becomes zero" cancellations in each remainder are exact and
//! a zero divisor is detected exactly rather than showing up as a huge
//! bogus component value.
//!
//! A negative leading-coefficient ratio is rejected as degenerate rather
//! than silently absolute-valued: for an impedance that actually came from a
//! positive RC network every extracted ratio is positive, so a negative one
//! means the input polynomials are not a realizable RC impedance.

use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::domain::{CauerLadder, CauerStage};
use crate::error::{Error, Result};
use crate::synth::RationalFunction;

/// Expand a rational impedance into a Cauer ladder of N (C, R) stages.
pub fn synthesize(zin: &RationalFunction) -> Result<CauerLadder> {
    let order = zin.order();

    // Dividend and divisor of the admittance view: 1/Z = den/num.
    let mut a: Vec<BigRational> = zin.den_exact().coeffs().to_vec();
    let mut b: Vec<BigRational> = zin.num_exact().coeffs().to_vec();

    let mut stages = Vec::with_capacity(order);
    for stage in 1..=order {
        // Shunt capacitance: ratio of the leading coefficients.
        if b[0].is_zero() {
            return Err(degenerate(stage, "zero leading coefficient in impedance numerator"));
        }
        let cap = &a[0] / &b[0];
        if cap.is_negative() {
            return Err(negative_ratio(stage, "capacitance", &cap));
        }

        // Remainder of the admittance numerator. The subtraction cancels the
        // leading term exactly; the lowest-order term of the dividend is
        // pulled down unchanged.
        let mut y_num: Vec<BigRational> = (0..a.len() - 1)
            .map(|i| &a[i] - &b[i] * &cap)
            .collect();
        y_num.push(a[a.len() - 1].clone());
        a = std::mem::replace(&mut b, y_num);

        // Series resistance from the admittance view: 1/Y = R + Z_next.
        // b[0] is the exactly-cancelled term, so the effective leading
        // coefficient is b[1].
        if b[1].is_zero() {
            return Err(degenerate(stage, "zero leading coefficient in admittance numerator"));
        }
        let res = &a[0] / &b[1];
        if res.is_negative() {
            return Err(negative_ratio(stage, "resistance", &res));
        }

        // Next impedance numerator; its leading term cancels exactly as
        // well. Both fully-accounted leading terms are dropped before the
        // next stage.
        let z_num: Vec<BigRational> = (0..a.len())
            .map(|i| &a[i] - &b[i + 1] * &res)
            .collect();
        let z_den = b;
        a = z_den[1..].to_vec();
        b = z_num[1..].to_vec();

        stages.push(CauerStage {
            c: finite(stage, "C", &cap)?,
            r: finite(stage, "R", &res)?,
        });
    }

    Ok(CauerLadder::new(stages))
}

/// Expand from raw `f64` coefficient vectors (highest degree first).
///
/// The denominator must be one coefficient longer than the numerator and
/// the implied order must be supported; both are checked before any
/// division happens.
pub fn synthesize_from_coeffs(num: &[f64], den: &[f64]) -> Result<CauerLadder> {
    let zin = RationalFunction::from_f64_coeffs(num, den)?;
    synthesize(&zin)
}

fn degenerate(stage: usize, detail: &str) -> Error {
    Error::DegenerateExpansion {
        stage,
        detail: detail.to_string(),
    }
}

fn negative_ratio(stage: usize, what: &str, ratio: &BigRational) -> Error {
    Error::DegenerateExpansion {
        stage,
        detail: format!(
            "negative {what} ratio {:.6e}; input is not a realizable RC impedance",
            ratio.to_f64().unwrap_or(f64::NAN)
        ),
    }
}

fn finite(stage: usize, what: &str, value: &BigRational) -> Result<f64> {
    let v = value.to_f64().unwrap_or(f64::NAN);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(degenerate(stage, &format!("{what} value does not fit in f64")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    // Fourth-order impedance from a fitted thermal curve; the expected
    // component values were computed with exact rational arithmetic.
    const Z_NUM: [f64; 4] = [0.1236, 3.202, 7.2855, 1.7];
    const Z_DEN: [f64; 5] = [0.005506, 1.8785, 7.247, 6.3744, 1.0];

    #[test]
    fn fourth_order_regression_values() {
        let ladder = synthesize_from_coeffs(&Z_NUM, &Z_DEN).unwrap();
        let expected = [
            (0.04454692556634304, 0.07120386839973089),
            (0.640753107019761, 1.0658937667542585),
            (2.0567850064717295, 0.30159866688142783),
            (15.680011160596612, 0.26130369796458275),
        ];
        assert_eq!(ladder.order(), 4);
        for (stage, (c, r)) in ladder.stages().iter().zip(expected) {
            assert_relative_eq!(stage.c, c, max_relative = 1e-9);
            assert_relative_eq!(stage.r, r, max_relative = 1e-9);
        }
    }

    #[test]
    fn all_components_strictly_positive() {
        let ladder = synthesize_from_coeffs(&Z_NUM, &Z_DEN).unwrap();
        for (label, value) in ladder.labeled() {
            assert!(value > 0.0 && value.is_finite(), "{label} = {value}");
        }
    }

    #[test]
    fn ladder_impedance_round_trips() {
        let zin = RationalFunction::from_f64_coeffs(&Z_NUM, &Z_DEN).unwrap();
        let ladder = synthesize(&zin).unwrap();
        for s in [
            Complex64::new(0.01, 0.0),
            Complex64::new(0.1, 0.3),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 3.0),
            Complex64::new(10.0, 1.0),
        ] {
            let z_ref = zin.eval(s);
            let z_ladder = ladder.impedance_at(s);
            let rel = (z_ladder - z_ref).norm() / z_ref.norm();
            assert!(rel < 1e-6, "relative error {rel} at s = {s}");
        }
    }

    #[test]
    fn zero_leading_numerator_coefficient_is_degenerate() {
        let num = [0.0, 1.0, 1.0];
        let den = [1.0, 2.0, 3.0, 1.0];
        match synthesize_from_coeffs(&num, &den) {
            Err(Error::DegenerateExpansion { stage: 1, .. }) => {}
            other => panic!("expected DegenerateExpansion, got {other:?}"),
        }
    }

    #[test]
    fn negative_ratio_is_rejected_not_absolute_valued() {
        let num = [1.0, 1.0, 1.0];
        let den = [-1.0, 2.0, 3.0, 1.0];
        match synthesize_from_coeffs(&num, &den) {
            Err(Error::DegenerateExpansion { stage: 1, detail }) => {
                assert!(detail.contains("negative"), "unexpected detail: {detail}");
            }
            other => panic!("expected DegenerateExpansion, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_coefficient_lengths_rejected() {
        assert!(matches!(
            synthesize_from_coeffs(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn second_order_input_rejected_before_any_division() {
        assert!(matches!(
            synthesize_from_coeffs(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::InvalidOrder { order: 2 })
        ));
    }
}
