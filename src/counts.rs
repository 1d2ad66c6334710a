//! Ordered atom-count map.
//!
//! This module provides [`AtomCounts`], a wrapper around [`IndexMap`] that
//! maps element symbols to the total number of atoms contributed by a
//! formula (or by one nesting level of it while a scan is in progress).
//!
//! ## Why IndexMap?
//!
//! Atom counts are pure accumulation and key order carries no meaning, but
//! `IndexMap` is used instead of `HashMap` to ensure:
//!
//! - **Deterministic iteration**: symbols come back in first-seen order
//! - **Stable output**: serialized results and test expectations never
//!   depend on hasher state
//!
//! ## Examples
//!
//! ```rust
//! use molparse::AtomCounts;
//!
//! let mut counts = AtomCounts::new();
//! counts.add("H", 2).unwrap();
//! counts.add("O", 1).unwrap();
//! counts.add("H", 2).unwrap();
//!
//! assert_eq!(counts.get("H"), Some(4));
//! assert_eq!(counts.len(), 2);
//! ```

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered map of element symbols to positive atom counts.
///
/// This is a thin wrapper around [`IndexMap`] that keeps first-seen symbol
/// order, which makes parser output deterministic and easy to assert on.
/// Zero counts are never stored: [`AtomCounts::add`] and
/// [`AtomCounts::merge_scaled`] silently drop contributions of zero.
/// All accumulation is checked: a total that would exceed `u64` fails with
/// [`Error::CountOverflow`] rather than wrapping.
///
/// # Examples
///
/// ```rust
/// use molparse::AtomCounts;
///
/// let mut counts = AtomCounts::new();
/// counts.add("Mg", 1).unwrap();
/// counts.add("O", 2).unwrap();
///
/// // Iteration maintains first-seen order
/// let symbols: Vec<_> = counts.symbols().cloned().collect();
/// assert_eq!(symbols, vec!["Mg", "O"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomCounts(IndexMap<String, u64>);

impl AtomCounts {
    /// Creates an empty `AtomCounts`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let counts = AtomCounts::new();
    /// assert!(counts.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        AtomCounts(IndexMap::new())
    }

    /// Creates an empty `AtomCounts` with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let counts = AtomCounts::with_capacity(8);
    /// assert!(counts.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AtomCounts(IndexMap::with_capacity(capacity))
    }

    /// Adds `count` atoms of `symbol`, summing with any existing entry.
    ///
    /// A `count` of zero is ignored so that zero-count symbols never
    /// appear as keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let mut counts = AtomCounts::new();
    /// counts.add("H", 2).unwrap();
    /// counts.add("H", 1).unwrap();
    /// counts.add("O", 0).unwrap();
    ///
    /// assert_eq!(counts.get("H"), Some(3));
    /// assert_eq!(counts.get("O"), None);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::CountOverflow`] if the symbol's total would exceed
    /// `u64`. The map is left unchanged in that case.
    pub fn add(&mut self, symbol: &str, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let entry = self.0.entry(symbol.to_string()).or_insert(0);
        *entry = entry
            .checked_add(count)
            .ok_or_else(|| Error::count_overflow(symbol))?;
        Ok(())
    }

    /// Folds `child` into `self`, scaling every count by `multiplier`.
    ///
    /// This is the merge step applied when a bracket group's result is
    /// returned to its enclosing level: each atom the group contributed is
    /// repeated `multiplier` times. Merging sibling groups in any order
    /// yields the same map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let mut parent = AtomCounts::new();
    /// parent.add("H", 2).unwrap();
    ///
    /// let mut group = AtomCounts::new();
    /// group.add("O", 1).unwrap();
    /// group.add("H", 1).unwrap();
    ///
    /// parent.merge_scaled(&group, 3).unwrap();
    /// assert_eq!(parent.get("H"), Some(5));
    /// assert_eq!(parent.get("O"), Some(3));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::CountOverflow`] if any scaled count, or any
    /// resulting total, would exceed `u64`.
    pub fn merge_scaled(&mut self, child: &AtomCounts, multiplier: u64) -> Result<()> {
        if multiplier == 0 {
            return Ok(());
        }
        for (symbol, count) in child.iter() {
            let scaled = count
                .checked_mul(multiplier)
                .ok_or_else(|| Error::count_overflow(symbol))?;
            self.add(symbol, scaled)?;
        }
        Ok(())
    }

    /// Returns the count for `symbol`, or `None` if it never occurred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let mut counts = AtomCounts::new();
    /// counts.add("Fe", 2).unwrap();
    /// assert_eq!(counts.get("Fe"), Some(2));
    /// assert_eq!(counts.get("Au"), None);
    /// ```
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.0.get(symbol).copied()
    }

    /// Returns `true` if `symbol` occurred at least once.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    /// Returns the number of distinct symbols in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let mut counts = AtomCounts::new();
    /// assert_eq!(counts.len(), 0);
    /// counts.add("H", 2).unwrap();
    /// assert_eq!(counts.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no symbols.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let counts = AtomCounts::new();
    /// assert!(counts.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the total number of atoms across all symbols, saturating at
    /// `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use molparse::AtomCounts;
    ///
    /// let mut counts = AtomCounts::new();
    /// counts.add("H", 2).unwrap();
    /// counts.add("O", 1).unwrap();
    /// assert_eq!(counts.total_atoms(), 3);
    /// ```
    #[must_use]
    pub fn total_atoms(&self) -> u64 {
        self.0
            .values()
            .fold(0u64, |total, count| total.saturating_add(*count))
    }

    /// Returns an iterator over the symbols of the map, in first-seen order.
    pub fn symbols(&self) -> indexmap::map::Keys<'_, String, u64> {
        self.0.keys()
    }

    /// Returns an iterator over `(symbol, count)` pairs, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(symbol, count)| (symbol.as_str(), *count))
    }
}

impl From<HashMap<String, u64>> for AtomCounts {
    fn from(map: HashMap<String, u64>) -> Self {
        AtomCounts(map.into_iter().filter(|(_, count)| *count > 0).collect())
    }
}

impl From<AtomCounts> for HashMap<String, u64> {
    fn from(counts: AtomCounts) -> Self {
        counts.0.into_iter().collect()
    }
}

impl IntoIterator for AtomCounts {
    type Item = (String, u64);
    type IntoIter = indexmap::map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
