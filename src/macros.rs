/// Builds an [`AtomCounts`](crate::AtomCounts) from `symbol => count`
/// pairs, summing repeated symbols just like the parser does.
///
/// # Examples
///
/// ```rust
/// use molparse::{atoms, parse_molecule};
///
/// let expected = atoms! {
///     "H" => 2,
///     "O" => 1,
/// };
/// assert_eq!(parse_molecule("H2O").unwrap(), expected);
/// ```
///
/// # Panics
///
/// Panics if a symbol's total count overflows `u64`. Literal atom counts
/// that large are a bug at the call site, not an input error.
#[macro_export]
macro_rules! atoms {
    // Empty mapping
    () => {
        $crate::AtomCounts::new()
    };

    // One or more symbol => count pairs, trailing comma optional
    ( $( $symbol:expr => $count:expr ),+ $(,)? ) => {{
        let mut counts = $crate::AtomCounts::new();
        $(
            counts
                .add($symbol, $count)
                .expect("atom count overflowed u64");
        )+
        counts
    }};
}
