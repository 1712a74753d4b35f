//! One conversion run: open both files, stream the scanner across them,
//! flush, and report what was done.

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::input::{open_destination, open_source, SetupError};
use crate::scan::{transform, ScanConfig, ScanError, ScanSummary};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Convert `source` into `destination` under `config`.
///
/// Resources live only for this call and are released on every exit
/// path. On the fatal numeral-too-long abort the writer is still
/// flushed, so everything converted before the offending run stays in
/// the destination file.
pub fn run(source: &Path, destination: &Path, config: ScanConfig) -> Result<RunSummary, RunError> {
    let reader = BufReader::new(open_source(source)?);
    let mut writer = BufWriter::new(open_destination(destination)?);

    info!(source = %source.display(), "processing input file");

    let result = transform(reader, &mut writer, config);
    let flushed = writer.flush();
    let summary = result?;
    flushed.map_err(ScanError::Io)?;

    info!(
        numerals = summary.numerals,
        literal_bytes = summary.literal_bytes,
        "conversion complete"
    );
    Ok(RunSummary { scan: summary })
}

/// What a completed run did.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub scan: ScanSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FileRole;
    use crate::scan::MAX_NUMBER_DIGITS;
    use std::fs;

    #[test]
    fn test_run_converts_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.txt");
        let dest = dir.path().join("out.txt");
        fs::write(&source, "chapter 12, page 305\n").unwrap();

        let summary = run(&source, &dest, ScanConfig::default()).unwrap();
        assert_eq!(summary.scan.numerals, 2);
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "chapter TWELVE, page THREE HUNDRED FIVE\n"
        );
    }

    #[test]
    fn test_run_missing_source_is_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.txt");
        let dest = dir.path().join("out.txt");

        let err = run(&source, &dest, ScanConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RunError::Setup(SetupError::Open {
                role: FileRole::Source,
                ..
            })
        ));
        // Nothing was processed, so no destination file appears either.
        assert!(!dest.exists());
    }

    #[test]
    fn test_run_unwritable_destination_is_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.txt");
        fs::write(&source, "text").unwrap();
        let dest = dir.path().join("no_such_dir").join("out.txt");

        let err = run(&source, &dest, ScanConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RunError::Setup(SetupError::Open {
                role: FileRole::Destination,
                ..
            })
        ));
    }

    #[test]
    fn test_fatal_numeral_keeps_earlier_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.txt");
        let dest = dir.path().join("out.txt");
        fs::write(
            &source,
            format!("count 7 then {} end", "3".repeat(MAX_NUMBER_DIGITS + 1)),
        )
        .unwrap();

        let err = run(&source, &dest, ScanConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RunError::Scan(ScanError::NumeralTooLong { .. })
        ));
        // Output flushed before the abort survives in the destination.
        assert_eq!(fs::read_to_string(&dest).unwrap(), "count SEVEN then ");
    }
}
