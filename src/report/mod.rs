//! Text formatting of fit results.

mod format;

pub use format::{format_cauer_params, format_foster};
