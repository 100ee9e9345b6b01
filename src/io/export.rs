//! Write Cauer component values as a SPICE include file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::CauerLadder;
use crate::error::{Error, Result};
use crate::report::format_cauer_params;

/// Write `.param` lines for every ladder component to `path`.
pub fn write_param_file(path: &Path, ladder: &CauerLadder) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        Error::Io(format!(
            "failed to create param file '{}': {e}",
            path.display()
        ))
    })?;
    file.write_all(format_cauer_params(ladder).as_bytes())
        .map_err(|e| Error::Io(format!("failed to write param file '{}': {e}", path.display())))
}
