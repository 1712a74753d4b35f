use lazy_static::lazy_static;

/// Read-only word tables for the English spelling of numbers.
///
/// Built once at first use and shared process-wide; no table is ever
/// mutated after construction.
pub struct Lexicon {
    ones: [&'static str; 10],
    teens: [&'static str; 10],
    tens: [&'static str; 10],
    scales: [Option<&'static str>; 4],
}

lazy_static! {
    static ref LEXICON: Lexicon = Lexicon::new();
}

impl Lexicon {
    fn new() -> Self {
        Self {
            // Index 0 is unused: a zero digit never produces a word on its own.
            ones: [
                "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
            ],
            // Indexed by the ones digit of a 10..=19 remainder.
            teens: [
                "TEN",
                "ELEVEN",
                "TWELVE",
                "THIRTEEN",
                "FOURTEEN",
                "FIFTEEN",
                "SIXTEEN",
                "SEVENTEEN",
                "EIGHTEEN",
                "NINETEEN",
            ],
            // Indices 0 and 1 are unused (teens are handled as a whole).
            tens: [
                "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY",
                "NINETY",
            ],
            // Indexed by base-1000 group position; the units group has no scale word.
            scales: [None, Some("THOUSAND"), Some("MILLION"), Some("BILLION")],
        }
    }

    /// Shared global instance.
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    /// Word for a single non-zero digit (1-9). Returns "" for 0.
    pub fn ones_word(&self, digit: u8) -> &'static str {
        self.ones.get(digit as usize).copied().unwrap_or("")
    }

    /// Word for a remainder in the teen range; `ones` is the final digit
    /// of a value 10..=19.
    pub fn teen_word(&self, ones: u8) -> &'static str {
        self.teens.get(ones as usize).copied().unwrap_or("")
    }

    /// Word for a tens multiple (2 => TWENTY .. 9 => NINETY). Returns ""
    /// for 0 and 1.
    pub fn tens_word(&self, tens: u8) -> &'static str {
        self.tens.get(tens as usize).copied().unwrap_or("")
    }

    /// Scale word for a base-1000 group index, if one exists.
    pub fn scale_word(&self, group_index: usize) -> Option<&'static str> {
        self.scales.get(group_index).copied().flatten()
    }
}
