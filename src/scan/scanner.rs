use std::io::{self, Read, Write};

use thiserror::Error;
use tracing::debug;

use super::token::{NumeralToken, MAX_NUMBER_DIGITS};
use crate::convert::write_number;

#[derive(Error, Debug)]
pub enum ScanError {
    /// A digit run grew past the configured cap. Fatal: scanning stops
    /// here and the rest of the input is never read.
    #[error("encountered a number longer than {max_digits} digits")]
    NumeralTooLong { max_digits: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Counters reported after a completed scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Digit runs converted to words.
    pub numerals: u64,
    /// Non-digit bytes copied through verbatim.
    pub literal_bytes: u64,
}

/// Scanner configuration. The digit cap is the program's only knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub max_digits: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_NUMBER_DIGITS,
        }
    }
}

/// Copy `input` to `output`, replacing every maximal run of decimal
/// digits with its uppercase English spelling.
///
/// Bytes are processed one at a time: digits accumulate into a
/// `NumeralToken`, anything else flushes the pending token through the
/// converter and then passes through unchanged. A pending token at end
/// of stream is flushed as well, so output order always matches input
/// order.
///
/// A digit run longer than `config.max_digits` aborts the scan with
/// `ScanError::NumeralTooLong`. Output written before the offending run
/// is kept; the buffered run itself is discarded.
pub fn transform<R: Read, W: Write>(
    input: R,
    output: &mut W,
    config: ScanConfig,
) -> Result<ScanSummary, ScanError> {
    let mut token = NumeralToken::new(config.max_digits);
    let mut summary = ScanSummary::default();

    for byte in input.bytes() {
        let byte = byte?;

        if byte.is_ascii_digit() {
            token.push(byte).map_err(|overflow| ScanError::NumeralTooLong {
                max_digits: overflow.max_digits,
            })?;
            continue;
        }

        flush_token(&mut token, output, &mut summary)?;
        output.write_all(&[byte])?;
        summary.literal_bytes += 1;
    }

    // A numeral can end the stream without a trailing delimiter.
    flush_token(&mut token, output, &mut summary)?;

    debug!(
        numerals = summary.numerals,
        literal_bytes = summary.literal_bytes,
        "scan complete"
    );
    Ok(summary)
}

fn flush_token<W: Write>(
    token: &mut NumeralToken,
    output: &mut W,
    summary: &mut ScanSummary,
) -> Result<(), ScanError> {
    if token.is_empty() {
        return Ok(());
    }
    write_number(token.magnitude(), output)?;
    token.clear();
    summary.numerals += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(input: &str) -> Result<(String, ScanSummary), ScanError> {
        let mut out = Vec::new();
        let summary = transform(input.as_bytes(), &mut out, ScanConfig::default())?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    #[test]
    fn test_plain_text_passes_through() {
        let (out, summary) = scan_str("no numbers here").unwrap();
        assert_eq!(out, "no numbers here");
        assert_eq!(summary.numerals, 0);
        assert_eq!(summary.literal_bytes, 15);
    }

    #[test]
    fn test_single_numeral_is_converted() {
        let (out, _) = scan_str("I have 3 apples").unwrap();
        assert_eq!(out, "I have THREE apples");
    }

    #[test]
    fn test_end_to_end_example() {
        let (out, summary) =
            scan_str("I have 3 apples and 25 oranges, order #100500.").unwrap();
        assert_eq!(
            out,
            "I have THREE apples and TWENTY FIVE oranges, order #ONE HUNDRED THOUSAND FIVE HUNDRED."
        );
        assert_eq!(summary.numerals, 3);
    }

    #[test]
    fn test_numeral_at_end_of_stream_is_flushed() {
        let (out, _) = scan_str("total: 42").unwrap();
        assert_eq!(out, "total: FORTY TWO");
    }

    #[test]
    fn test_numeral_only_input() {
        let (out, summary) = scan_str("1000000").unwrap();
        assert_eq!(out, "ONE MILLION");
        assert_eq!(summary.numerals, 1);
        assert_eq!(summary.literal_bytes, 0);
    }

    #[test]
    fn test_all_zero_run_spells_zero() {
        let (out, _) = scan_str("id 00.").unwrap();
        assert_eq!(out, "id ZERO.");
    }

    #[test]
    fn test_leading_zeros_drop_out() {
        let (out, _) = scan_str("agent 007 reporting").unwrap();
        assert_eq!(out, "agent SEVEN reporting");
    }

    #[test]
    fn test_adjacent_runs_split_by_non_digits() {
        let (out, _) = scan_str("1.2").unwrap();
        assert_eq!(out, "ONE.TWO");
    }

    #[test]
    fn test_newlines_and_punctuation_preserved() {
        let (out, _) = scan_str("line 1\nline 2\n").unwrap();
        assert_eq!(out, "line ONE\nline TWO\n");
    }

    #[test]
    fn test_run_of_exactly_max_digits_converts() {
        let input = "9".repeat(MAX_NUMBER_DIGITS);
        let (out, summary) = scan_str(&input).unwrap();
        assert!(out.starts_with("NINE HUNDRED NINETY NINE BILLION"));
        assert_eq!(summary.numerals, 1);
    }

    #[test]
    fn test_run_past_max_digits_is_fatal() {
        let input = format!("ok 12 then {}", "9".repeat(MAX_NUMBER_DIGITS + 1));
        let mut out = Vec::new();
        let err = transform(input.as_bytes(), &mut out, ScanConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ScanError::NumeralTooLong {
                max_digits: MAX_NUMBER_DIGITS
            }
        ));
        // Output up to the offending run is kept; the run itself is not.
        assert_eq!(String::from_utf8(out).unwrap(), "ok TWELVE then ");
    }

    #[test]
    fn test_abort_happens_on_first_excess_digit() {
        // Nothing after the over-long run is scanned or copied.
        let input = format!("{} trailing text 5", "1".repeat(MAX_NUMBER_DIGITS + 1));
        let mut out = Vec::new();
        let err = transform(input.as_bytes(), &mut out, ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::NumeralTooLong { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_custom_digit_cap() {
        let config = ScanConfig { max_digits: 3 };
        let mut out = Vec::new();
        let summary = transform("999!".as_bytes(), &mut out, config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "NINE HUNDRED NINETY NINE!");
        assert_eq!(summary.numerals, 1);

        let mut out = Vec::new();
        let err = transform("1000".as_bytes(), &mut out, config).unwrap_err();
        assert!(matches!(err, ScanError::NumeralTooLong { max_digits: 3 }));
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let input: &[u8] = b"\xff 7 \xfe";
        let mut out = Vec::new();
        transform(input, &mut out, ScanConfig::default()).unwrap();
        assert_eq!(out, b"\xff SEVEN \xfe");
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        let (out, summary) = scan_str("").unwrap();
        assert_eq!(out, "");
        assert_eq!(summary, ScanSummary::default());
    }
}
