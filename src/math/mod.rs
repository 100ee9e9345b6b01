//! Math primitives: exact polynomial arithmetic for impedance algebra.

mod poly;

pub use poly::{rational_from_f64, Poly};
