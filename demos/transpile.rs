//! Parse a Batspp source and render it as a Bats script.

use batspp_rs::GenerateOptions;

fn main() {
    let input = "\
# Setup
$ export LC_ALL=C

# Test adds
$ echo 1+1 | bc
2
$ echo 2*3 | bc
6

# Test lists
$ touch a b
$ ls
a
b

hostname =/> localhost
";

    let suite = batspp_rs::parse_str(input, false).expect("parse failed");

    println!("Tests: {}", suite.tests.len());
    for test in &suite.tests {
        println!("  {} ({} assertion(s))", test.reference, test.assertions.len());
        for assertion in &test.assertions {
            println!("    {}: {}", assertion.kind, assertion.actual.join(" "));
        }
    }
    println!("Global setup: {:?}", suite.setup_commands);

    let options = GenerateOptions::default().source("demo.batspp");
    let script = batspp_rs::generate(&suite, &options);
    println!("\nGenerated script:\n{script}");
}
