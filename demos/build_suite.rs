//! Build a test suite programmatically using the builder API.

use batspp_rs::{Assertion, GenerateOptions, Test, TestsSuite};

fn main() {
    let suite = TestsSuite::new()
        .setup("export LC_ALL=C")
        .teardown("rm -f greeting.txt")
        .test(
            Test::new("writes a greeting")
                .assertion(
                    Assertion::output("cat greeting.txt")
                        .setup("echo hello > greeting.txt")
                        .expect("hello"),
                )
                .assertion(Assertion::equal("wc -l < greeting.txt").expect("1")),
        )
        .test(
            Test::new("long pipeline").assertion(
                Assertion::output("printf 'b\\na\\n' \\")
                    .continued("| sort")
                    .expect_text("a\nb\n"),
            ),
        )
        .test(Test::new("clock moves").assertion(Assertion::not_equal("date +%N").expect("0")));

    let options = GenerateOptions::default().sandbox(false);
    println!("{}", batspp_rs::generate(&suite, &options));
}
