//! Network synthesis: Foster impedance combination and Cauer
//! continued-fraction expansion.

mod cauer;
mod impedance;

pub use cauer::{synthesize, synthesize_from_coeffs};
pub use impedance::{build_impedance, RationalFunction};
