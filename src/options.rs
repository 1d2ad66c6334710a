//! Configuration options for formula parsing.
//!
//! This module provides [`ParseOptions`], which controls the two knobs the
//! parser exposes:
//!
//! - how strictly element symbols are checked (strict by default)
//! - how deeply bracket groups may nest before the parse is rejected
//!
//! ## Examples
//!
//! ```rust
//! use molparse::{parse_molecule_with_options, ParseOptions};
//!
//! // Strict mode (the default) rejects a lowercase letter that does not
//! // directly extend a one-letter uppercase symbol.
//! assert!(parse_molecule_with_options("H2o", ParseOptions::new()).is_err());
//!
//! // Permissive mode mirrors the historical behavior and appends it to
//! // whatever symbol is pending.
//! let counts = parse_molecule_with_options("H2o", ParseOptions::permissive()).unwrap();
//! assert_eq!(counts.get("Ho"), Some(2));
//! ```

/// Default bound on bracket-group nesting depth.
///
/// Deeply nested groups recurse one stack frame per level, so unbounded
/// nesting would let a pathological input overflow the stack.
pub const DEFAULT_MAX_NESTING: usize = 64;

/// Configuration options for formula parsing.
///
/// # Examples
///
/// ```rust
/// use molparse::ParseOptions;
///
/// // Default strict options
/// let options = ParseOptions::new();
///
/// // Historical permissive symbol handling
/// let options = ParseOptions::permissive();
///
/// // Custom configuration
/// let options = ParseOptions::new().with_max_nesting(8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// When `true`, a lowercase letter is appended to whatever symbol is
    /// pending, even across coefficient digits or beyond two letters.
    /// When `false` (default), such input fails with an invalid-format
    /// error.
    pub permissive_symbols: bool,
    /// Maximum bracket-group nesting depth before the parse is rejected.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            permissive_symbols: false,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl ParseOptions {
    /// Creates default options (strict symbols, 64-level nesting bound).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(!options.permissive_symbols);
    /// assert_eq!(options.max_nesting, 64);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with permissive symbol handling.
    ///
    /// A lowercase letter then extends the pending symbol unconditionally,
    /// so `H2o` parses as two `Ho` rather than being rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::ParseOptions;
    ///
    /// let options = ParseOptions::permissive();
    /// assert!(options.permissive_symbols);
    /// ```
    #[must_use]
    pub fn permissive() -> Self {
        ParseOptions {
            permissive_symbols: true,
            ..Default::default()
        }
    }

    /// Sets whether symbol checking is permissive.
    #[must_use]
    pub fn with_permissive_symbols(mut self, permissive: bool) -> Self {
        self.permissive_symbols = permissive;
        self
    }

    /// Sets the maximum bracket-group nesting depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_max_nesting(4);
    /// assert_eq!(options.max_nesting, 4);
    /// ```
    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}
