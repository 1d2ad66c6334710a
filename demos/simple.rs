//! Your first molparse experience: parse a batch of sample formulas and
//! print what each one is made of.
//!
//! Run with: `cargo run --example simple`

use molparse::parse_molecule;

fn main() {
    let formulas = ["H2O3", "Mg4H2O41NFd", "H2(Mg2N)4", "Mg(OH{Mg4N[G2F]}3)2"];

    for formula in formulas {
        let counts = parse_molecule(formula).expect("sample formulas are well-formed");
        let composition = counts
            .iter()
            .map(|(symbol, count)| format!("{symbol}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{formula:24} {{{composition}}}");
    }
}
