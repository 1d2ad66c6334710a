//! Error types for formula parsing.
//!
//! This module provides structured error reporting for every way a formula
//! can be rejected, with enough context to point at the offending character.
//!
//! ## Error Categories
//!
//! - **Empty input**: the formula has zero length
//! - **Format errors**: disallowed characters or a malformed element symbol
//! - **Bracket errors**: a closer with no opener, or an opener with no closer
//! - **Depth guard**: nesting deeper than the configured limit
//! - **Overflow**: a total atom count that does not fit in `u64`
//!
//! ## Error Context
//!
//! Parsing errors carry the byte position of the offence in the *original*
//! top-level input, even when the failure is detected inside a nested
//! bracket group. Bracket errors also name the bracket character involved.
//!
//! ## Examples
//!
//! ```rust
//! use molparse::{parse_molecule, Error};
//!
//! let result = parse_molecule("H2)O");
//! assert!(matches!(result, Err(Error::UnopenedBracket { bracket: ')', position: 2 })));
//!
//! if let Err(err) = parse_molecule("H2(O2(Mg4") {
//!     eprintln!("Parse error: {}", err);
//!     // Error messages include the bracket and its position
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing a formula.
///
/// Each variant includes the context needed to locate and explain the
/// failure. All errors abort the parse immediately; there is no partial
/// result and no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input formula has zero length.
    #[error("formula must not be empty")]
    EmptyInput,

    /// The formula violates the accepted character set or symbol shape.
    #[error("invalid formula format at position {position}: {reason}")]
    InvalidFormat { position: usize, reason: String },

    /// A closing bracket appeared with no corresponding opener pending.
    #[error("bracket '{bracket}' at position {position} is closed but was never opened")]
    UnopenedBracket { bracket: char, position: usize },

    /// An opening bracket was never matched by its own closer.
    #[error("bracket '{bracket}' at position {position} was never closed with '{expected}'")]
    UnclosedBracket {
        bracket: char,
        position: usize,
        expected: char,
    },

    /// Bracket groups were nested deeper than the configured limit.
    #[error("bracket groups nested deeper than the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    /// A symbol's total atom count exceeded the representable range.
    #[error("total count for '{symbol}' exceeds the supported range")]
    CountOverflow { symbol: String },
}

impl Error {
    /// Creates an invalid-format error at a byte position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::Error;
    ///
    /// let err = Error::invalid_format(0, "formula must begin with an uppercase letter");
    /// assert!(err.to_string().contains("position 0"));
    /// ```
    pub fn invalid_format(position: usize, reason: impl Into<String>) -> Self {
        Error::InvalidFormat {
            position,
            reason: reason.into(),
        }
    }

    /// Creates an error for a closing bracket with no pending opener.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::Error;
    ///
    /// let err = Error::unopened_bracket(')', 2);
    /// assert!(err.to_string().contains("never opened"));
    /// ```
    pub fn unopened_bracket(bracket: char, position: usize) -> Self {
        Error::UnopenedBracket { bracket, position }
    }

    /// Creates an error for an opening bracket whose closer was never found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::Error;
    ///
    /// let err = Error::unclosed_bracket('(', 2, ')');
    /// assert!(err.to_string().contains("never closed"));
    /// ```
    pub fn unclosed_bracket(bracket: char, position: usize, expected: char) -> Self {
        Error::UnclosedBracket {
            bracket,
            position,
            expected,
        }
    }

    /// Creates an error for the recursion-depth guard.
    pub fn nesting_too_deep(limit: usize) -> Self {
        Error::NestingTooDeep { limit }
    }

    /// Creates an error for a symbol whose total count overflowed `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::Error;
    ///
    /// let err = Error::count_overflow("Mg");
    /// assert!(err.to_string().contains("'Mg'"));
    /// ```
    pub fn count_overflow(symbol: impl Into<String>) -> Self {
        Error::CountOverflow {
            symbol: symbol.into(),
        }
    }

    /// Returns the byte position associated with this error, if any.
    ///
    /// Positions are offsets into the original top-level input, not into
    /// the nested slice where the failure was detected.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::InvalidFormat { position, .. }
            | Error::UnopenedBracket { position, .. }
            | Error::UnclosedBracket { position, .. } => Some(*position),
            Error::EmptyInput | Error::NestingTooDeep { .. } | Error::CountOverflow { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
