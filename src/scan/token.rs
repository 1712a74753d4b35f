/// Default cap on the number of digits in a single numeral run.
pub const MAX_NUMBER_DIGITS: usize = 12;

/// Signalled when a digit run grows past the configured cap.
#[derive(Debug, PartialEq, Eq)]
pub struct TokenOverflow {
    pub max_digits: usize,
}

/// A bounded buffer of consecutive digit characters pulled from the
/// input stream.
///
/// The buffer only ever holds ASCII digits; `push` rejects the digit
/// that would grow it past the cap. A token is cleared after each
/// conversion and discarded wholesale on overflow.
#[derive(Debug)]
pub struct NumeralToken {
    digits: Vec<u8>,
    max_digits: usize,
}

impl NumeralToken {
    pub fn new(max_digits: usize) -> Self {
        Self {
            digits: Vec::with_capacity(max_digits),
            max_digits,
        }
    }

    /// Append one digit byte. Fails if the token is already at the cap;
    /// the buffered digits are left untouched so the caller can decide
    /// what to do with the run.
    pub fn push(&mut self, digit: u8) -> Result<(), TokenOverflow> {
        debug_assert!(digit.is_ascii_digit());
        if self.digits.len() == self.max_digits {
            return Err(TokenOverflow {
                max_digits: self.max_digits,
            });
        }
        self.digits.push(digit);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Integer value of the buffered digits. Leading zeros carry no
    /// value, so "007" parses to 7 and "00" to 0. Twelve digits fit a
    /// u64 with room to spare.
    pub fn magnitude(&self) -> u64 {
        self.digits
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0'))
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }
}
