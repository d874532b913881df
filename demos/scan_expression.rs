//! Scan a few expressions and print their token streams.

fn main() {
    for source in ["3 + 4 * 2", "(1 - 0.5) / 2", "3.5.2"] {
        match calclex::tokenize("<demo>", source) {
            Ok(tokens) => {
                let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
                println!("{source:<16} => [{}]", rendered.join(", "));
            }
            Err(e) => println!("{source:<16} => {e}"),
        }
    }
}
