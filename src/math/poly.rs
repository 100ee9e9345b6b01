//! Exact univariate polynomials over arbitrary-precision rationals.
//!
//! The continued-fraction synthesis step divides leading coefficients over
//! and over, so rounding introduced while combining the Foster fractions
//! would compound across up to five ladder stages. To avoid that, the
//! combination and the expansion both run on `BigRational` coefficients:
//! every finite `f64` converts to an exact rational, and ring operations on
//! rationals are exact, so the only rounding in the whole algebraic path is
//! the final conversion of each extracted component value back to `f64`.
//!
//! Coefficients are stored highest degree first, matching the coefficient
//! vector convention of the synthesis algorithm.

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Convert a finite `f64` to the rational it represents exactly.
pub fn rational_from_f64(v: f64) -> Result<BigRational> {
    BigRational::from_float(v)
        .ok_or_else(|| Error::InvalidInput(format!("non-finite value {v} in coefficient input")))
}

/// A polynomial with exact rational coefficients, highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Poly {
    coeffs: Vec<BigRational>,
}

impl Poly {
    /// Build from exact coefficients. The vector must be non-empty; a
    /// constant polynomial has a single coefficient.
    pub fn new(coeffs: Vec<BigRational>) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self { coeffs }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::new(vec![BigRational::from_integer(1.into())])
    }

    /// The constant polynomial `v`.
    pub fn constant(v: BigRational) -> Self {
        Self::new(vec![v])
    }

    /// The linear polynomial `a·s + 1`.
    pub fn linear_plus_one(a: BigRational) -> Self {
        Self::new(vec![a, BigRational::from_integer(1.into())])
    }

    /// Exact conversion of an `f64` coefficient vector.
    pub fn from_f64(coeffs: &[f64]) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Error::InvalidInput(
                "empty coefficient vector".to_string(),
            ));
        }
        let coeffs = coeffs
            .iter()
            .map(|&v| rational_from_f64(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(coeffs))
    }

    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Rounded `f64` view of the coefficients, highest degree first.
    pub fn to_f64(&self) -> Vec<f64> {
        self.coeffs
            .iter()
            .map(|c| c.to_f64().unwrap_or(f64::NAN))
            .collect()
    }

    /// Exact polynomial product.
    pub fn mul(&self, other: &Poly) -> Poly {
        let mut out = vec![BigRational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Poly::new(out)
    }

    /// Exact polynomial sum. Coefficients are aligned by degree, i.e. on the
    /// low-order (right) end.
    pub fn add(&self, other: &Poly) -> Poly {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut out = vec![BigRational::zero(); n];
        for (i, a) in self.coeffs.iter().rev().enumerate() {
            out[n - 1 - i] += a;
        }
        for (i, b) in other.coeffs.iter().rev().enumerate() {
            out[n - 1 - i] += b;
        }
        Poly::new(out)
    }
}
