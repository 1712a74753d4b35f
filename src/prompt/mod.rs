//! Interactive acquisition of file names.
//!
//! Used when the file names are not given on the command line: the
//! program asks for each name on stdout and reads the answer from
//! stdin, exactly one line per question.

use std::io::{self, BufRead, Write};

use crate::input::{validate_file_name, FileRole, SetupError};

/// Extract a usable file name from one line of user input.
///
/// Strips surrounding whitespace (including the line terminator left by
/// `read_line`) and rejects answers that are empty once trimmed.
pub fn parse_file_name(line: &str, role: FileRole) -> Result<String, SetupError> {
    validate_file_name(line, role).map(str::to_string)
}

/// Ask for the file name of `role` and read one line of response.
pub fn prompt_file_name(role: FileRole) -> Result<String, io::Error> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ask_file_name(&mut stdin.lock(), &mut stdout, role)
}

/// Testable core of `prompt_file_name`, generic over the two streams.
pub fn ask_file_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    role: FileRole,
) -> Result<String, io::Error> {
    write!(output, "Enter the {} file name: ", role)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
