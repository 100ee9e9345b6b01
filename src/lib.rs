//! `fostercauer` library crate.
//!
//! Converts a measured thermal step-response curve (Zth vs. time) into an
//! equivalent Cauer RC ladder for circuit simulators, in three stages:
//!
//! 1. [`fit::fit_foster`]: bounded nonlinear least-squares fit of a
//!    sum-of-exponentials Foster model to the samples
//! 2. [`synth::build_impedance`]: exact combination of the Foster branch
//!    impedances into one rational function of `s`
//! 3. [`synth::synthesize`]: continued-fraction expansion into the Cauer
//!    ladder
//!
//! The binary (`f2c`) is a thin wrapper around this library so the core
//! logic stays testable without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
pub mod synth;
