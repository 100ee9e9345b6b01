//! Driving-point impedance of a Foster ladder as a single rational function.
//!
//! The ladder's impedance is the sum of its branch impedances:
//!
//! ```text
//! Z(s) = Σ R_i / (1 + s·R_i·C_i)
//! ```
//!
//! Combining the N fractions over the common denominator is done with exact
//! rational arithmetic (see [`crate::math::Poly`]): the downstream
//! continued-fraction step is sensitive to the denominator coefficients, so
//! no floating-point truncation is allowed before it.

use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Zero;

use crate::domain::{FosterLadder, Order};
use crate::error::{Error, Result};
use crate::math::{rational_from_f64, Poly};

/// A strictly proper rational function of the complex frequency `s`,
/// with exact coefficients, highest degree first.
///
/// Invariants (enforced at construction): the denominator has degree N for
/// a supported order N, the numerator has degree N−1.
#[derive(Debug, Clone, PartialEq)]
pub struct RationalFunction {
    num: Poly,
    den: Poly,
}

impl RationalFunction {
    fn new(num: Poly, den: Poly) -> Self {
        debug_assert_eq!(num.degree() + 1, den.degree());
        Self { num, den }
    }

    /// Exact conversion from `f64` coefficient vectors (highest degree
    /// first). The denominator must be exactly one entry longer than the
    /// numerator, and the implied order must be supported.
    pub fn from_f64_coeffs(num: &[f64], den: &[f64]) -> Result<Self> {
        if num.is_empty() || den.len() != num.len() + 1 {
            return Err(Error::InvalidInput(format!(
                "expected denominator one coefficient longer than numerator, got {} and {}",
                den.len(),
                num.len(),
            )));
        }
        Order::new(num.len())?;
        Ok(Self::new(Poly::from_f64(num)?, Poly::from_f64(den)?))
    }

    /// Ladder order N (degree of the denominator).
    pub fn order(&self) -> usize {
        self.den.degree()
    }

    /// Numerator coefficients rounded to `f64`, highest degree first.
    pub fn numerator(&self) -> Vec<f64> {
        self.num.to_f64()
    }

    /// Denominator coefficients rounded to `f64`, highest degree first.
    pub fn denominator(&self) -> Vec<f64> {
        self.den.to_f64()
    }

    pub(crate) fn num_exact(&self) -> &Poly {
        &self.num
    }

    pub(crate) fn den_exact(&self) -> &Poly {
        &self.den
    }

    /// Evaluate `Z(s)` at a complex frequency (Horner on the rounded
    /// coefficients).
    pub fn eval(&self, s: Complex64) -> Complex64 {
        horner(&self.numerator(), s) / horner(&self.denominator(), s)
    }
}

fn horner(coeffs: &[f64], s: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * s + c)
}

/// Combine a Foster ladder into a single rational impedance function.
///
/// Fails with [`Error::DegenerateNetwork`] if any branch has `R·C = 0`: such
/// a branch has no pole and the common-denominator combination is undefined
/// for it.
pub fn build_impedance(ladder: &FosterLadder) -> Result<RationalFunction> {
    Order::new(ladder.order())?;

    let mut rs = Vec::with_capacity(ladder.order());
    let mut taus = Vec::with_capacity(ladder.order());
    for (i, branch) in ladder.branches().iter().enumerate() {
        let r = rational_from_f64(branch.r)?;
        let c = rational_from_f64(branch.c)?;
        let tau = &r * &c;
        if tau.is_zero() {
            return Err(Error::DegenerateNetwork {
                branch: i + 1,
                r: branch.r,
                c: branch.c,
            });
        }
        rs.push(r);
        taus.push(tau);
    }

    // den = Π (τ_i·s + 1); num = Σ R_i · Π_{j≠i} (τ_j·s + 1)
    let mut den = Poly::one();
    for tau in &taus {
        den = den.mul(&Poly::linear_plus_one(tau.clone()));
    }
    let mut num = Poly::constant(BigRational::zero());
    for (i, r) in rs.iter().enumerate() {
        let mut term = Poly::constant(r.clone());
        for (j, tau) in taus.iter().enumerate() {
            if j != i {
                term = term.mul(&Poly::linear_plus_one(tau.clone()));
            }
        }
        num = num.add(&term);
    }

    Ok(RationalFunction::new(num, den))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FosterBranch;
    use approx::assert_relative_eq;

    fn test_ladder() -> FosterLadder {
        // Time constants 0.1, 1.0, 10.0, well separated.
        FosterLadder::new(vec![
            FosterBranch { r: 1.0, c: 0.1 },
            FosterBranch { r: 0.5, c: 2.0 },
            FosterBranch { r: 0.25, c: 40.0 },
        ])
    }

    #[test]
    fn combines_three_branch_ladder() {
        let zin = build_impedance(&test_ladder()).unwrap();
        let num = zin.numerator();
        let den = zin.denominator();

        // Expanded by hand: num = 10.525s^2 + 16.325s + 1.75,
        //                   den = s^3 + 11.1s^2 + 11.1s + 1.
        let num_expected = [10.525, 16.325, 1.75];
        let den_expected = [1.0, 11.1, 11.1, 1.0];
        for (got, want) in num.iter().zip(num_expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
        for (got, want) in den.iter().zip(den_expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
    }

    #[test]
    fn numerator_degree_is_order_minus_one() {
        let zin = build_impedance(&test_ladder()).unwrap();
        assert_eq!(zin.order(), 3);
        assert_eq!(zin.numerator().len(), 3);
        assert_eq!(zin.denominator().len(), 4);
    }

    #[test]
    fn build_is_idempotent() {
        let ladder = test_ladder();
        let a = build_impedance(&ladder).unwrap();
        let b = build_impedance(&ladder).unwrap();
        assert_eq!(a.numerator(), b.numerator());
        assert_eq!(a.denominator(), b.denominator());
    }

    #[test]
    fn eval_matches_branch_sum() {
        let ladder = test_ladder();
        let zin = build_impedance(&ladder).unwrap();
        for s in [
            Complex64::new(0.0, 0.0),
            Complex64::new(0.3, 1.7),
            Complex64::new(0.0, 100.0),
        ] {
            let direct = ladder.impedance_at(s);
            let combined = zin.eval(s);
            assert_relative_eq!(combined.re, direct.re, max_relative = 1e-10);
            assert_relative_eq!(combined.im, direct.im, max_relative = 1e-10, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_capacitance_branch_is_degenerate() {
        let ladder = FosterLadder::new(vec![
            FosterBranch { r: 1.0, c: 0.1 },
            FosterBranch { r: 0.5, c: 0.0 },
            FosterBranch { r: 0.25, c: 40.0 },
        ]);
        match build_impedance(&ladder) {
            Err(Error::DegenerateNetwork { branch, .. }) => assert_eq!(branch, 2),
            other => panic!("expected DegenerateNetwork, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_order_rejected_before_algebra() {
        let ladder = FosterLadder::new(vec![
            FosterBranch { r: 1.0, c: 0.1 },
            FosterBranch { r: 0.5, c: 2.0 },
        ]);
        assert!(matches!(
            build_impedance(&ladder),
            Err(Error::InvalidOrder { order: 2 })
        ));
    }

    #[test]
    fn from_f64_coeffs_validates_shape() {
        assert!(matches!(
            RationalFunction::from_f64_coeffs(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            RationalFunction::from_f64_coeffs(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::InvalidOrder { order: 2 })
        ));
    }
}
