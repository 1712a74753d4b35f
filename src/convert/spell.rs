use std::io::{self, Write};

use super::lexicon::Lexicon;

/// Write the uppercase English spelling of `magnitude` to `out`.
///
/// Words are separated by single spaces with no leading or trailing
/// space. Zero is spelled as the literal word "ZERO"; every other value
/// is decomposed into base-1000 groups that are rendered most
/// significant first, each non-zero group followed by its scale word
/// (THOUSAND, MILLION, BILLION).
pub fn write_number<W: Write>(magnitude: u64, out: &mut W) -> io::Result<()> {
    if magnitude == 0 {
        return out.write_all(b"ZERO");
    }
    write_group(magnitude, 0, out).map(|_| ())
}

/// Convenience wrapper that spells `magnitude` into an owned string.
pub fn spell_out(magnitude: u64) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail, and the tables are pure ASCII.
    let _ = write_number(magnitude, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render one base-1000 group after recursing into the more significant
/// groups, so the words come out left to right.
///
/// Returns whether any word has been written so far, which decides if
/// the next word needs a separating space.
fn write_group<W: Write>(number: u64, group_index: usize, out: &mut W) -> io::Result<bool> {
    let group = (number % 1000) as u16;
    let rest = number / 1000;

    let mut wrote = false;
    if rest > 0 {
        wrote = write_group(rest, group_index + 1, out)?;
    }

    // A zero group contributes nothing, not even its scale word.
    if group == 0 {
        return Ok(wrote);
    }

    let lex = Lexicon::global();
    let hundreds = (group / 100) as u8;
    let remainder = group % 100;
    let tens = (remainder / 10) as u8;
    let ones = (remainder % 10) as u8;

    if hundreds > 0 {
        if wrote {
            out.write_all(b" ")?;
        }
        write!(out, "{} HUNDRED", lex.ones_word(hundreds))?;
        wrote = true;
    }

    if tens == 1 {
        // 10..=19 is a single word; the remainder is not split further.
        if wrote {
            out.write_all(b" ")?;
        }
        out.write_all(lex.teen_word(ones).as_bytes())?;
        wrote = true;
    } else {
        if tens > 1 {
            if wrote {
                out.write_all(b" ")?;
            }
            out.write_all(lex.tens_word(tens).as_bytes())?;
            wrote = true;
        }
        if ones > 0 {
            if wrote {
                out.write_all(b" ")?;
            }
            out.write_all(lex.ones_word(ones).as_bytes())?;
            wrote = true;
        }
    }

    if group_index > 0 {
        // The group is non-zero here, so it owns a scale word. The
        // scanner's digit limit keeps the index within the named range.
        if let Some(scale) = lex.scale_word(group_index) {
            write!(out, " {}", scale)?;
        }
    }

    Ok(wrote)
}
