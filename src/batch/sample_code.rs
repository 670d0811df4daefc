// src/batch/sample_code.rs
//! Sample code generation with a trailing checksum character.
//!
//! A sample code is the project code plus a zero-padded running number plus
//! one checksum character. The checksum is the character-weighted sum of the
//! code modulo 34, mapped onto the alphabet `0-9A-X` (skipping the gap
//! between '9' and 'A' in ASCII).

/// Computes the checksum character for a bare code (without the checksum).
pub fn checksum_char(code: &str) -> char {
    let sum: u32 = code
        .chars()
        .enumerate()
        .map(|(index, ch)| (ch as u32) * (index as u32 + 1))
        .sum();
    map_to_char(sum % 34)
}

fn map_to_char(value: u32) -> char {
    let mut ascii = value + 48;
    if ascii > 57 {
        ascii += 7;
    }
    // value < 34, so ascii stays within '0'..='X'
    (ascii as u8) as char
}

/// Builds a full sample code: project code, 3-digit running number, checksum.
pub fn sample_code(project_code: &str, number: u32) -> String {
    let base = format!("{project_code}{number:03}");
    let check = checksum_char(&base);
    format!("{base}{check}")
}
