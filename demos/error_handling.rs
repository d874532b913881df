//! Demonstrate error handling for invalid expression input.

fn main() {
    // Character outside the language's alphabet
    match calclex::tokenize("input.calc", "5 & 2") {
        Ok(_) => println!("Scanned OK (unexpected)"),
        Err(e) => {
            println!("{e}");
            println!("  Kind: {:?}", e.kind);
            println!(
                "  Location: line {}, column {}",
                e.span.start.line, e.span.start.column
            );
        }
    }

    println!();

    // Integer literal too large for a 64-bit value
    match calclex::tokenize("input.calc", "99999999999999999999 + 1") {
        Ok(_) => println!("Scanned OK (unexpected)"),
        Err(e) => {
            println!("{e}");
            println!("  Kind: {:?}", e.kind);
        }
    }
}
