//! Bounded sum-of-exponentials fitting (Foster model extraction).

mod fitter;
mod init;

pub use fitter::fit_foster;
pub(crate) use init::{initial_guesses, log_space};
