//! The formula scanner.
//!
//! One [`Scanner`] owns exactly one flat slice of the input: it accumulates
//! element symbols and their coefficients left to right, and on an opening
//! bracket it eagerly locates the matching same-kind closer, hands the text
//! in between to a fresh validate-and-scan pass, and folds the nested
//! result back in scaled by the multiplier after the closer. Nesting is
//! therefore handled by recursion, one level per bracket group, and each
//! level mutates only its own [`AtomCounts`].
//!
//! Matching searches for the specific closer belonging to the specific
//! opener while counting depth over *all* bracket kinds, so an inner group
//! of a different kind can never terminate the outer one, and a kind
//! mismatch such as `(...]` surfaces as an unclosed-bracket error for the
//! pending opener.

use crate::counts::AtomCounts;
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::validate;

/// Runs the full validate-and-scan pipeline over one formula slice.
///
/// `base` is the slice's byte offset in the original input and `depth` the
/// number of bracket groups enclosing it; the top-level call passes 0 for
/// both.
pub(crate) fn parse_at(
    formula: &str,
    base: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<AtomCounts> {
    if depth > options.max_nesting {
        return Err(Error::nesting_too_deep(options.max_nesting));
    }
    validate::validate_at(formula, base)?;
    Scanner::new(formula, base, depth, options).scan()
}

fn closing_bracket(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        _ => b'}',
    }
}

fn is_opener(byte: u8) -> bool {
    matches!(byte, b'(' | b'[' | b'{')
}

fn is_closer(byte: u8) -> bool {
    matches!(byte, b')' | b']' | b'}')
}

/// Single-pass cursor over one validated formula slice.
///
/// Validation guarantees the slice is ASCII, so byte positions and
/// character positions coincide.
struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    base: usize,
    depth: usize,
    pos: usize,
    options: &'a ParseOptions,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, base: usize, depth: usize, options: &'a ParseOptions) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            base,
            depth,
            pos: 0,
            options,
        }
    }

    fn scan(mut self) -> Result<AtomCounts> {
        let mut counts = AtomCounts::new();
        // The symbol being accumulated and the coefficient digits trailing
        // it; both commit together when the next token starts. The start
        // offset of the digit run is kept so range errors point at it.
        let mut symbol = String::new();
        let mut digits = String::new();
        let mut digits_start = 0;

        while let Some(&byte) = self.bytes.get(self.pos) {
            match byte {
                b'A'..=b'Z' => {
                    self.commit(&mut counts, &mut symbol, &mut digits, digits_start)?;
                    symbol.push(byte as char);
                    self.pos += 1;
                }
                b'a'..=b'z' => {
                    if symbol.is_empty() {
                        return Err(Error::invalid_format(
                            self.base + self.pos,
                            format!(
                                "lowercase letter '{}' does not follow an uppercase letter",
                                byte as char
                            ),
                        ));
                    }
                    let extends_single_letter = symbol.len() == 1 && digits.is_empty();
                    if !extends_single_letter && !self.options.permissive_symbols {
                        return Err(Error::invalid_format(
                            self.base + self.pos,
                            format!(
                                "lowercase letter '{}' cannot extend the symbol '{symbol}'",
                                byte as char
                            ),
                        ));
                    }
                    symbol.push(byte as char);
                    self.pos += 1;
                }
                b'0'..=b'9' => {
                    if digits.is_empty() {
                        digits_start = self.pos;
                    }
                    digits.push(byte as char);
                    self.pos += 1;
                }
                b'(' | b'[' | b'{' => {
                    // A group never inherits a pending coefficient.
                    self.commit(&mut counts, &mut symbol, &mut digits, digits_start)?;
                    self.scan_group(&mut counts)?;
                }
                b')' | b']' | b'}' => {
                    return Err(Error::unopened_bracket(byte as char, self.base + self.pos));
                }
                _ => {
                    // Unreachable after validation; fail hard rather than skip.
                    return Err(Error::invalid_format(
                        self.base + self.pos,
                        format!("unexpected character '{}'", byte as char),
                    ));
                }
            }
        }

        self.commit(&mut counts, &mut symbol, &mut digits, digits_start)?;
        Ok(counts)
    }

    /// Commits the pending symbol with its coefficient (absent means 1)
    /// into `counts`, summing with earlier occurrences of the same symbol.
    fn commit(
        &self,
        counts: &mut AtomCounts,
        symbol: &mut String,
        digits: &mut String,
        digits_start: usize,
    ) -> Result<()> {
        if symbol.is_empty() {
            return Ok(());
        }
        let count = if digits.is_empty() {
            1
        } else {
            self.parse_digit_run(digits, digits_start, "coefficient")?
        };
        counts.add(symbol, count)?;
        symbol.clear();
        digits.clear();
        Ok(())
    }

    /// Consumes one bracket group starting at the current position and
    /// merges its scaled result into `counts`.
    fn scan_group(&mut self, counts: &mut AtomCounts) -> Result<()> {
        let open_pos = self.pos;
        let open = self.bytes[self.pos];
        let close = closing_bracket(open);
        self.pos += 1;
        let body_start = self.pos;

        // Walk forward to the closer that belongs to this opener. Openers
        // of any kind raise the depth and closers of any kind lower it;
        // only a same-kind closer at depth zero is the match.
        let mut inner_depth = 0usize;
        let body_end = loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Err(Error::unclosed_bracket(
                    open as char,
                    self.base + open_pos,
                    close as char,
                ));
            };
            if is_opener(byte) {
                inner_depth += 1;
            } else if is_closer(byte) {
                if inner_depth == 0 {
                    if byte == close {
                        break self.pos;
                    }
                    // A closer of the wrong kind pairs with this opener.
                    return Err(Error::unclosed_bracket(
                        open as char,
                        self.base + open_pos,
                        close as char,
                    ));
                }
                inner_depth -= 1;
            }
            self.pos += 1;
        };

        self.pos += 1; // past the closer
        let multiplier = self.read_multiplier()?;

        // An empty group is legal and contributes nothing; a non-empty
        // body goes through the full pipeline again as its own formula.
        let body = &self.input[body_start..body_end];
        if !body.is_empty() {
            let nested = parse_at(body, self.base + body_start, self.depth + 1, self.options)?;
            counts.merge_scaled(&nested, multiplier)?;
        }
        Ok(())
    }

    /// Reads the maximal digit run at the cursor as a group multiplier.
    /// An absent run means 1.
    fn read_multiplier(&mut self) -> Result<u64> {
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|byte| byte.is_ascii_digit())
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(1);
        }
        let run = &self.input[start..self.pos];
        self.parse_digit_run(run, start, "multiplier")
    }

    /// Parses one digit run into a `u64`. `start` is where the run begins
    /// in this slice, so a value out of range is reported at the digits
    /// themselves rather than at the cursor.
    fn parse_digit_run(&self, digits: &str, start: usize, what: &str) -> Result<u64> {
        digits.parse::<u64>().map_err(|_| {
            Error::invalid_format(
                self.base + start,
                format!("{what} '{digits}' is out of range"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(formula: &str) -> Result<AtomCounts> {
        parse_at(formula, 0, 0, &ParseOptions::default())
    }

    #[test]
    fn test_single_atoms_and_coefficients() {
        let counts = parse("H2O3").unwrap();
        assert_eq!(counts.get("H"), Some(2));
        assert_eq!(counts.get("O"), Some(3));
    }

    #[test]
    fn test_multi_digit_coefficient() {
        let counts = parse("O41").unwrap();
        assert_eq!(counts.get("O"), Some(41));
    }

    #[test]
    fn test_two_letter_symbols() {
        let counts = parse("Mg4Fd").unwrap();
        assert_eq!(counts.get("Mg"), Some(4));
        assert_eq!(counts.get("Fd"), Some(1));
    }

    #[test]
    fn test_group_multiplier_scales_contents() {
        let counts = parse("H2(Mg2N)4").unwrap();
        assert_eq!(counts.get("H"), Some(2));
        assert_eq!(counts.get("Mg"), Some(8));
        assert_eq!(counts.get("N"), Some(4));
    }

    #[test]
    fn test_group_does_not_inherit_pending_coefficient() {
        // The 2 binds to H; the group's own multiplier is 3.
        let counts = parse("H2(O)3").unwrap();
        assert_eq!(counts.get("H"), Some(2));
        assert_eq!(counts.get("O"), Some(3));
    }

    #[test]
    fn test_mixed_bracket_kinds_nest() {
        let counts = parse("K[B{C(D)2}3]4").unwrap();
        assert_eq!(counts.get("K"), Some(1));
        assert_eq!(counts.get("B"), Some(4));
        assert_eq!(counts.get("C"), Some(12));
        assert_eq!(counts.get("D"), Some(24));
    }

    #[test]
    fn test_inner_group_of_other_kind_does_not_close_outer() {
        let counts = parse("A(B[C]2D)3").unwrap();
        assert_eq!(counts.get("A"), Some(1));
        assert_eq!(counts.get("B"), Some(3));
        assert_eq!(counts.get("C"), Some(6));
        assert_eq!(counts.get("D"), Some(3));
    }

    #[test]
    fn test_empty_group_contributes_nothing() {
        let counts = parse("A()2B").unwrap();
        assert_eq!(counts.get("A"), Some(1));
        assert_eq!(counts.get("B"), Some(1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_repeated_symbol_sums_within_one_level() {
        let counts = parse("HOH").unwrap();
        assert_eq!(counts.get("H"), Some(2));
        assert_eq!(counts.get("O"), Some(1));
    }

    #[test]
    fn test_unopened_bracket() {
        assert_eq!(
            parse("H2)O").unwrap_err(),
            Error::unopened_bracket(')', 2)
        );
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(
            parse("H2(O2(Mg4").unwrap_err(),
            Error::unclosed_bracket('(', 2, ')')
        );
    }

    #[test]
    fn test_kind_mismatch_reports_pending_opener() {
        assert_eq!(
            parse("H(Mg{)}").unwrap_err(),
            Error::unclosed_bracket('(', 1, ')')
        );
    }

    #[test]
    fn test_error_position_inside_nested_slice_is_absolute() {
        // The offending '3' sits at byte 5 of the whole input, two
        // bracket levels down.
        let err = parse("Mg(O(3H)2)").unwrap_err();
        assert_eq!(err.position(), Some(5));
    }

    #[test]
    fn test_wrong_kind_closer_pairs_with_opener() {
        let err = parse("H(O]2)").unwrap_err();
        assert_eq!(err, Error::unclosed_bracket('(', 1, ')'));
    }

    #[test]
    fn test_embedded_slice_is_validated_as_a_formula() {
        // The group body starts with a digit, which the validator rejects
        // at its absolute position.
        let err = parse("H(2O)").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 2, .. }));
    }

    #[test]
    fn test_strict_mode_rejects_lowercase_after_digits() {
        let err = parse("H2o").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 2, .. }));
    }

    #[test]
    fn test_permissive_mode_extends_pending_symbol() {
        let options = ParseOptions::permissive();
        let counts = parse_at("H2o", 0, 0, &options).unwrap();
        assert_eq!(counts.get("Ho"), Some(2));
    }

    #[test]
    fn test_strict_mode_rejects_three_letter_symbol() {
        let err = parse("Abc").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 2, .. }));
    }

    #[test]
    fn test_nesting_guard() {
        let options = ParseOptions::new().with_max_nesting(2);
        assert!(parse_at("A(B(C)2)3", 0, 0, &options).is_ok());
        assert_eq!(
            parse_at("A(B(C(D)2)3)4", 0, 0, &options).unwrap_err(),
            Error::nesting_too_deep(2)
        );
    }

    #[test]
    fn test_out_of_range_coefficient_points_at_its_digits() {
        // 20 nines cannot fit in u64; the error points at the start of
        // the digit run, not past it.
        let err = parse("H99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 1, .. }));
    }

    #[test]
    fn test_out_of_range_multiplier_points_at_its_digits() {
        let err = parse("H(O)99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { position: 4, .. }));
    }

    #[test]
    fn test_summed_counts_overflowing_u64_are_an_error() {
        // Each run parses on its own; the sum does not fit.
        let err = parse("A9999999999999999999A9999999999999999999").unwrap_err();
        assert_eq!(err, Error::count_overflow("A"));
    }

    #[test]
    fn test_group_multiplier_overflowing_u64_is_an_error() {
        let err = parse("X(A9999999999999999999)9").unwrap_err();
        assert_eq!(err, Error::count_overflow("A"));
    }

    #[test]
    fn test_zero_multiplier_yields_no_keys() {
        let counts = parse("A(B)0C").unwrap();
        assert_eq!(counts.get("A"), Some(1));
        assert_eq!(counts.get("C"), Some(1));
        assert!(!counts.contains("B"));
    }
}
