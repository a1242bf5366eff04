//! Demonstrate error handling for invalid Batspp input.

fn main() {
    // Command marker with no command
    match batspp_rs::parse_str("# Test empty\n$\n", false) {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(batspp_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
        Err(batspp_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
        }
    }

    println!();

    // Setup bound to a test that is never declared
    match batspp_rs::parse_str("# Setup of ghost\n$ mkdir data\n", false) {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(batspp_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
        }
        Err(batspp_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
            println!("  Source: {}", e.source_line);
        }
    }

    println!();

    // Continuation before any test, reported through the unified error
    if let Err(e) = batspp_rs::parse_str("# Continuation\n$ echo a\na\n", false) {
        println!("Error: {e}");
        println!("{:>5} | {}", e.span().line, e.source_line());
    }
}
