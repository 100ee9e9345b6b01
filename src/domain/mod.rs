//! Shared domain types.

mod types;

pub use types::{
    CauerLadder, CauerStage, FitConfig, FosterBranch, FosterLadder, Order, Sample,
    DEFAULT_C_MAX, DEFAULT_MAX_ITERATIONS, DEFAULT_R_MAX,
};
