pub mod scanner;
pub mod token;

pub use scanner::{transform, ScanConfig, ScanError, ScanSummary};
pub use token::{NumeralToken, TokenOverflow, MAX_NUMBER_DIGITS};
