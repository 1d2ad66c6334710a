//! Input validation ahead of scanning.
//!
//! Validation rejects obviously malformed input before the scanner runs:
//! empty input, a formula that does not begin with an uppercase element
//! symbol, and any character outside `[A-Za-z0-9(){}[]]`.
//!
//! Bracket balance is deliberately *not* checked here. A balance check
//! would cost a second full pass over the string, and the scanner can
//! report the more specific failure anyway (which bracket, at which
//! position) while it walks the input.

use crate::error::{Error, Result};

/// Returns `true` for the characters a formula may contain: ASCII letters,
/// digits, and the three bracket pairs.
pub(crate) fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Validates one formula slice.
///
/// `base` is the slice's byte offset in the original top-level input, so
/// that positions in reported errors stay absolute when the scanner
/// re-validates an embedded formula.
pub(crate) fn validate_at(formula: &str, base: usize) -> Result<()> {
    match formula.chars().next() {
        None => return Err(Error::EmptyInput),
        Some(first) if !first.is_ascii_uppercase() => {
            return Err(Error::invalid_format(
                base,
                format!("formula must begin with an uppercase element symbol, found '{first}'"),
            ));
        }
        Some(_) => {}
    }

    for (offset, ch) in formula.char_indices() {
        if !is_allowed(ch) {
            return Err(Error::invalid_format(
                base + offset,
                format!("character '{ch}' is not a letter, digit, or bracket"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_formula() {
        assert!(validate_at("Mg(OH)2", 0).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_at("", 0), Err(Error::EmptyInput));
    }

    #[test]
    fn test_rejects_leading_digit() {
        let err = validate_at("2H", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 0, .. }));
    }

    #[test]
    fn test_rejects_leading_lowercase() {
        let err = validate_at("hO", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 0, .. }));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        let err = validate_at("H#ZZZ@_", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 1, .. }));
    }

    #[test]
    fn test_positions_are_offset_by_base() {
        let err = validate_at("H O", 3).unwrap_err();
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_brackets_pass_without_balance_check() {
        // Balance is the scanner's job.
        assert!(validate_at("H((", 0).is_ok());
    }
}
