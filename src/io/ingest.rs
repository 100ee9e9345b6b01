//! CSV ingest: `time,zth` rows into [`Sample`]s.
//!
//! The expected format is two numeric columns, time first, no header row
//! (a single header row can be skipped with the `header` flag). Rows that
//! fail to parse abort the run with the offending 1-based line number;
//! silently dropping measurement points would bias the fit.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::Sample;
use crate::error::{Error, Result};

/// Read samples from a CSV file on disk.
pub fn read_samples(path: &Path, header: bool) -> Result<Vec<Sample>> {
    let file = File::open(path)
        .map_err(|e| Error::Io(format!("failed to open CSV '{}': {e}", path.display())))?;
    read_samples_from(file, header)
}

/// Read samples from any reader (separated from the file handling so the
/// parsing is testable without touching the filesystem).
pub fn read_samples_from<R: Read>(reader: R, header: bool) -> Result<Vec<Sample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(header)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let line_offset = if header { 2 } else { 1 };
    let mut samples = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let line = idx + line_offset;
        let record =
            record.map_err(|e| Error::Io(format!("failed to read CSV line {line}: {e}")))?;
        if record.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "CSV line {line}: expected `time,zth`, got {} column(s)",
                record.len()
            )));
        }
        let time = parse_field(&record[0], line, "time")?;
        let response = parse_field(&record[1], line, "zth")?;
        samples.push(Sample { time, response });
    }
    Ok(samples)
}

fn parse_field(raw: &str, line: usize, name: &str) -> Result<f64> {
    raw.parse::<f64>().map_err(|_| {
        Error::InvalidInput(format!("CSV line {line}: invalid {name} value '{raw}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headerless_rows() {
        let csv = "0.0,0.0\n0.1,0.35\n1.0,1.2\n";
        let samples = read_samples_from(csv.as_bytes(), false).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].time, 0.1);
        assert_eq!(samples[1].response, 0.35);
    }

    #[test]
    fn skips_header_row_when_asked() {
        let csv = "time,zth\n0.1,0.35\n";
        let samples = read_samples_from(csv.as_bytes(), true).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].time, 0.1);
    }

    #[test]
    fn malformed_value_reports_line_number() {
        let csv = "0.0,0.0\n0.1,oops\n";
        match read_samples_from(csv.as_bytes(), false) {
            Err(Error::InvalidInput(msg)) => {
                assert!(msg.contains("line 2"), "message was: {msg}");
                assert!(msg.contains("zth"), "message was: {msg}");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn single_column_row_rejected() {
        let csv = "0.0\n";
        assert!(matches!(
            read_samples_from(csv.as_bytes(), false),
            Err(Error::InvalidInput(_))
        ));
    }
}
