//! Hebrew numeral (gematria) encoding for day-of-month and year values.

use crate::error::{LuachError, Result};

/// Lowest year `encode_year_number` accepts.
pub const MIN_YEAR: i32 = 5000;
/// Highest year `encode_year_number` accepts.
pub const MAX_YEAR: i32 = 6000;

/// Day-of-month numerals, indexed by day. Index 0 is unused.
const DAY_NUMERALS: [&str; 31] = [
    "", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט", //
    "י", "יא", "יב", "יג", "יד", "טו", "טז", "יז", "יח", "יט", //
    "כ", "כא", "כב", "כג", "כד", "כה", "כו", "כז", "כח", "כט", //
    "ל",
];

const GERSHAYIM: char = '"';

/// Single Hebrew letter for a units, tens or hundreds value.
///
/// Covers 1–9, 10–90 in steps of ten and 100–400 in steps of a hundred.
pub fn numeral_letter(value: u32) -> Option<char> {
    let letter = match value {
        1 => 'א',
        2 => 'ב',
        3 => 'ג',
        4 => 'ד',
        5 => 'ה',
        6 => 'ו',
        7 => 'ז',
        8 => 'ח',
        9 => 'ט',
        10 => 'י',
        20 => 'כ',
        30 => 'ל',
        40 => 'מ',
        50 => 'נ',
        60 => 'ס',
        70 => 'ע',
        80 => 'פ',
        90 => 'צ',
        100 => 'ק',
        200 => 'ר',
        300 => 'ש',
        400 => 'ת',
        _ => return None,
    };
    Some(letter)
}

/// Encode a Hebrew day-of-month (1–30).
///
/// Days come straight from a fixed table, so 15 and 16 are `טו` and `טז` and
/// no gershayim is added. Values outside the table fall back to decimal.
pub fn encode_day_number(n: u32) -> String {
    match DAY_NUMERALS.get(n as usize) {
        Some(s) if !s.is_empty() => (*s).to_string(),
        _ => n.to_string(),
    }
}

/// Encode a Hebrew year in the range 5000–6000, dropping the thousands.
///
/// ```
/// use luach_core::gematria::encode_year_number;
/// assert_eq!(encode_year_number(5784).unwrap(), "תשפ\"ד");
/// ```
pub fn encode_year_number(year: i32) -> Result<String> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(LuachError::InvalidRange { year });
    }
    Ok(encode_number(year.unsigned_abs() % 1000))
}

/// Encode any value below 1000 with the standard letter-sum rules.
///
/// Thousands are discarded. Returns an empty string for 0.
pub fn encode_number(n: u32) -> String {
    let letters = letters_for(n % 1000);
    punctuate(letters)
}

fn letters_for(remainder: u32) -> Vec<char> {
    let mut letters = Vec::new();

    // 900 = ת + ת + ק
    let mut hundreds = remainder / 100 * 100;
    while hundreds > 0 {
        if hundreds > 400 {
            letters.extend(numeral_letter(400));
            hundreds -= 400;
        } else {
            letters.extend(numeral_letter(hundreds));
            break;
        }
    }

    let tens_and_ones = remainder % 100;
    if tens_and_ones == 15 || tens_and_ones == 16 {
        // Written 9 + 6 / 9 + 7 so the letters never spell a divine name.
        letters.extend(numeral_letter(9));
        letters.extend(numeral_letter(tens_and_ones - 9));
    } else {
        let tens = tens_and_ones / 10 * 10;
        let ones = tens_and_ones % 10;
        if tens > 0 {
            letters.extend(numeral_letter(tens));
        }
        if ones > 0 {
            letters.extend(numeral_letter(ones));
        }
    }

    letters
}

/// Insert gershayim before the final letter when there is more than one.
fn punctuate(mut letters: Vec<char>) -> String {
    if letters.len() > 1 {
        letters.insert(letters.len() - 1, GERSHAYIM);
    }
    letters.into_iter().collect()
}
