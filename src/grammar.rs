//! Accepted Formula Grammar
//!
//! This module documents the textual formula language accepted by this
//! library.
//!
//! # Overview
//!
//! A formula is a run of element symbols, coefficients, and bracket groups
//! with no whitespace, drawn entirely from `[A-Za-z0-9(){}[]]`. Parsing
//! resolves it into a flat mapping from element symbol to the total number
//! of atoms it contributes.
//!
//! # Core Syntax
//!
//! ## Element symbols
//!
//! A symbol is one uppercase ASCII letter, optionally followed by one
//! lowercase letter:
//!
//! ```text
//! H     hydrogen
//! Mg    magnesium
//! ```
//!
//! **Rules**:
//! - A formula must begin with an uppercase letter (never a digit or a
//!   bracket-relative coefficient)
//! - A lowercase letter must directly extend a one-letter uppercase symbol;
//!   `H2o` and a third letter are rejected in the default strict mode
//! - [`ParseOptions::permissive`](crate::ParseOptions::permissive) restores
//!   the historical lenient behavior, where a lowercase letter appends to
//!   whatever symbol is pending (`H2o` then counts two `Ho`)
//!
//! ## Coefficients
//!
//! The maximal digit run after a symbol repeats that atom; absent means 1.
//! Multi-digit runs are a single coefficient:
//!
//! ```text
//! H2O3         H:2, O:3
//! Mg4H2O41NFd  Mg:4, H:2, O:41, N:1, Fd:1
//! ```
//!
//! A coefficient is never a standalone token. `2H` is invalid.
//!
//! ## Bracket groups
//!
//! Three interchangeable-in-meaning but not-in-pairing bracket kinds
//! delimit sub-formulas: `(` pairs only with `)`, `[` with `]`, `{` with
//! `}`. The digit run after the closer multiplies every atom the group
//! yields, including atoms from deeper groups; absent means 1:
//!
//! ```text
//! H2(Mg2N)4            H:2, Mg:8, N:4
//! Mg(OH{Mg4N[G2F]}3)2  Mg:25, O:2, H:2, N:6, G:12, F:6
//! A(B(C(D)2)3)4        D contributes 1*2*3*4 = 24
//! ```
//!
//! The text between a pair of brackets is itself a complete formula and is
//! validated and scanned as one. An empty group `A()2B` is legal and
//! contributes nothing.
//!
//! ## Zero counts
//!
//! A coefficient or multiplier of `0` erases its contribution entirely;
//! zero-count symbols never appear in the result, so every reported count
//! is at least 1.
//!
//! # Errors
//!
//! | Error | Trigger |
//! |-------|---------|
//! | `EmptyInput` | zero-length input |
//! | `InvalidFormat` | leading non-uppercase, disallowed character, malformed symbol, out-of-range digit run |
//! | `UnopenedBracket` | a closer with no opener pending, as in `H2)O` |
//! | `UnclosedBracket` | an opener never matched, as in `H2(O2(Mg4` or the kind mismatch `H(Mg{)}` |
//! | `NestingTooDeep` | groups nested beyond [`ParseOptions::max_nesting`](crate::ParseOptions) |
//! | `CountOverflow` | a symbol's total atom count does not fit in `u64` |
//!
//! Errors abort the parse immediately and carry the byte position of the
//! offence in the original input, even when detected inside a nested
//! group.
//!
//! # Out of scope
//!
//! No whitespace tolerance, no molecule addition or hydrate dots, no
//! charges, no isotopes, no Unicode element names, and no notion of
//! chemical validity: `Fd` parses fine even though no such element exists.

// This module contains only documentation; no implementation code
