//! What rejected inputs look like: every error carries the offending
//! character's position in the original input, so callers can point at it.
//!
//! Run with: `cargo run --example error_reporting`

use molparse::parse_molecule;

fn main() {
    let malformed = ["", "H#ZZZ@_", "2H", "H2(O2(Mg4", "H(Mg{)}", "H2)O"];

    for formula in malformed {
        let err = parse_molecule(formula).expect_err("sample formulas are malformed");
        println!("  {formula}");
        if let Some(position) = err.position() {
            println!("  {}^", " ".repeat(position));
        }
        println!("  error: {err}\n");
    }
}
