//! # molparse
//!
//! A parser for textual chemical formulas that resolves nested bracket
//! groups into a normalized per-element atom count.
//!
//! ## What does it do?
//!
//! Given a formula such as `Mg(OH)2`, the parser returns a mapping from
//! element symbol to the total number of atoms that symbol contributes,
//! with bracket-group multipliers applied through every level of nesting:
//!
//! ```text
//! Mg(OH)2   →   Mg: 1, O: 2, H: 2
//! ```
//!
//! ## Key Features
//!
//! - **Three bracket kinds**: `()`, `[]`, and `{}` nest freely, but each
//!   opener must be closed by its own kind
//! - **Single-pass scanning**: one left-to-right walk per nesting level,
//!   with O(1) lookahead and no grammar engine
//! - **Deterministic results**: counts come back in first-seen symbol order
//!   via an [`IndexMap`](indexmap::IndexMap)-backed map
//! - **Structured errors**: every rejection names the offending character
//!   and its byte position in the original input
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! molparse = "0.1"
//! ```
//!
//! ### Parsing a formula
//!
//! ```rust
//! use molparse::parse_molecule;
//!
//! let water = parse_molecule("H2O").unwrap();
//! assert_eq!(water.get("H"), Some(2));
//! assert_eq!(water.get("O"), Some(1));
//!
//! let nested = parse_molecule("K4[ON(SO3)2]2").unwrap();
//! assert_eq!(nested.get("K"), Some(4));
//! assert_eq!(nested.get("O"), Some(14));
//! assert_eq!(nested.get("N"), Some(2));
//! assert_eq!(nested.get("S"), Some(4));
//! ```
//!
//! ### Handling malformed input
//!
//! ```rust
//! use molparse::{parse_molecule, Error};
//!
//! assert_eq!(parse_molecule(""), Err(Error::EmptyInput));
//! assert!(matches!(parse_molecule("2H"), Err(Error::InvalidFormat { .. })));
//! assert!(matches!(parse_molecule("H2)O"), Err(Error::UnopenedBracket { .. })));
//! assert!(matches!(parse_molecule("H2(O2(Mg4"), Err(Error::UnclosedBracket { .. })));
//! ```
//!
//! ### Custom options
//!
//! ```rust
//! use molparse::{parse_molecule_with_options, ParseOptions};
//!
//! // The historical lenient symbol handling, plus a tighter nesting bound
//! let options = ParseOptions::permissive().with_max_nesting(8);
//! let counts = parse_molecule_with_options("H2o", options).unwrap();
//! assert_eq!(counts.get("Ho"), Some(2));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Scanning**: each character is visited once by its own level's loop,
//!   plus once by each enclosing level's bracket-matching search, so work
//!   is O(length × nesting depth) in the worst case
//! - **Memory**: one count map per in-flight nesting level, merged upward
//! - **Concurrency**: parsing is a pure function of its input; independent
//!   parses share no state and may run in parallel freely
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the parsing API; malformed input and atom totals too
//!   large for `u64` are [`Result`] errors
//! - Recursion depth is bounded (see
//!   [`ParseOptions::max_nesting`](ParseOptions)), so a pathological input
//!   cannot overflow the stack
//!
//! ## Grammar
//!
//! For the accepted formula grammar and the full error table, see the
//! [`grammar`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - parsing a batch of sample formulas
//! - **`error_reporting.rs`** - what rejected inputs look like
//!
//! Run any example with: `cargo run --example <name>`

pub mod counts;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod options;

mod scanner;
mod validate;

pub use counts::AtomCounts;
pub use error::{Error, Result};
pub use options::{ParseOptions, DEFAULT_MAX_NESTING};

/// Parses a chemical formula into per-element atom counts.
///
/// This is the single entry point most callers need. It validates the
/// input, scans it left to right, and resolves every bracket group
/// recursively, multiplying nested contributions by the group's trailing
/// multiplier.
///
/// # Examples
///
/// ```rust
/// use molparse::parse_molecule;
///
/// let counts = parse_molecule("H2(Mg2N)4").unwrap();
/// assert_eq!(counts.get("H"), Some(2));
/// assert_eq!(counts.get("Mg"), Some(8));
/// assert_eq!(counts.get("N"), Some(4));
/// ```
///
/// # Errors
///
/// Returns an error if the formula is empty, contains a disallowed
/// character, does not begin with an uppercase letter, or has unbalanced
/// or mismatched brackets. See [`Error`] for the full taxonomy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_molecule(formula: &str) -> Result<AtomCounts> {
    parse_molecule_with_options(formula, ParseOptions::default())
}

/// Parses a chemical formula with custom [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use molparse::{parse_molecule_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_max_nesting(2);
/// assert!(parse_molecule_with_options("A(B(C(D)2)3)4", options).is_err());
/// ```
///
/// # Errors
///
/// Returns an error under the same conditions as [`parse_molecule`], plus
/// [`Error::NestingTooDeep`] when groups nest beyond the configured limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_molecule_with_options(formula: &str, options: ParseOptions) -> Result<AtomCounts> {
    scanner::parse_at(formula, 0, 0, &options)
}
