//! Error taxonomy for the Foster→Cauer pipeline.
//!
//! Every failure mode is a distinct variant carrying enough context (order,
//! stage, offending value) to diagnose the call that produced it. Nothing is
//! retried internally: every stage is a pure function of its inputs, so a
//! retry without different inputs cannot change the outcome.

use thiserror::Error;

/// Smallest ladder order the fitting model and synthesis loop support.
pub const ORDER_MIN: usize = 3;
/// Largest supported ladder order.
pub const ORDER_MAX: usize = 5;

/// Errors produced by the fitting/synthesis pipeline and the CLI glue.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested ladder order is outside the supported range.
    ///
    /// Detected before any sample data is touched.
    #[error("order {order} is invalid (supported: {ORDER_MIN}..={ORDER_MAX})")]
    InvalidOrder { order: usize },

    /// Empty or malformed input data (samples, bounds, coefficient vectors).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The bounded least-squares optimizer did not converge.
    #[error("fit did not converge ({reason}); final objective {residual:.6e}")]
    FitFailure { reason: String, residual: f64 },

    /// A Foster branch with `R·C = 0` makes the common-denominator
    /// combination undefined.
    #[error("degenerate network: branch {branch} has R={r}, C={c} (R*C must be nonzero)")]
    DegenerateNetwork { branch: usize, r: f64, c: f64 },

    /// Continued-fraction expansion hit a zero divisor or a negative
    /// component ratio; the input is not a realizable RC impedance.
    #[error("degenerate expansion at stage {stage}: {detail}")]
    DegenerateExpansion { stage: usize, detail: String },

    /// Filesystem / CSV plumbing errors from the CLI layer.
    #[error("{0}")]
    Io(String),
}

impl Error {
    /// Process exit code for the CLI: 2 for usage/input problems, 3 when the
    /// fit fails, 4 when the algebra degenerates.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidOrder { .. } | Error::InvalidInput(_) | Error::Io(_) => 2,
            Error::FitFailure { .. } => 3,
            Error::DegenerateNetwork { .. } | Error::DegenerateExpansion { .. } => 4,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
