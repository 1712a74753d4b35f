use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Which end of the pipeline a file name belongs to. Used so error
/// messages can say which resource failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Source,
    Destination,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Source => write!(f, "input"),
            FileRole::Destination => write!(f, "output"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SetupError {
    /// The caller supplied a blank file name; rejected before any open.
    #[error("no {role} file name was given")]
    EmptyFileName { role: FileRole },

    /// The OS refused to open the file for its role.
    #[error("failed to open {role} file {}: {source}", path.display())]
    Open {
        role: FileRole,
        path: PathBuf,
        source: io::Error,
    },
}

/// Reject empty or whitespace-only file names up front.
pub fn validate_file_name(name: &str, role: FileRole) -> Result<&str, SetupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SetupError::EmptyFileName { role });
    }
    Ok(name)
}

/// Open the file the scanner reads from.
pub fn open_source(path: &Path) -> Result<File, SetupError> {
    File::open(path).map_err(|source| SetupError::Open {
        role: FileRole::Source,
        path: path.to_path_buf(),
        source,
    })
}

/// Create (or truncate) the file the converted text is written to.
pub fn open_destination(path: &Path) -> Result<File, SetupError> {
    File::create(path).map_err(|source| SetupError::Open {
        role: FileRole::Destination,
        path: path.to_path_buf(),
        source,
    })
}
