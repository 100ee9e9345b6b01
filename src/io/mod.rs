//! CSV ingest and SPICE include-file export.

mod export;
mod ingest;

pub use export::write_param_file;
pub use ingest::{read_samples, read_samples_from};
