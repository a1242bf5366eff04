#![allow(dead_code)]

use batspp_rs::{AssertionKind, TestsSuite, TokenKind, parse_str, tokenize};

/// One assertion without its spans: kind, setup, actual, expected.
pub type AssertionShape = (AssertionKind, Vec<String>, Vec<String>, Vec<String>);

/// Test reference with its assertions, spans stripped.
pub type Shape = Vec<(String, Vec<AssertionShape>)>;

pub fn parse_ok(input: &str, embedded: bool) -> TestsSuite {
    parse_str(input, embedded)
        .unwrap_or_else(|e| panic!("parse failed: {e}\n--- input ---\n{input}"))
}

pub fn kinds(input: &str, embedded: bool) -> Vec<TokenKind> {
    tokenize(input, embedded)
        .unwrap_or_else(|e| panic!("tokenize failed: {e}\n--- input ---\n{input}"))
        .iter()
        .map(|t| t.kind)
        .collect()
}

/// Reduce a suite to what survives a change of source layout.
pub fn shape(suite: &TestsSuite) -> Shape {
    suite
        .tests
        .iter()
        .map(|test| {
            let assertions = test
                .assertions
                .iter()
                .map(|a| {
                    (
                        a.kind,
                        a.setup_commands.clone(),
                        a.actual.clone(),
                        a.expected.clone(),
                    )
                })
                .collect();
            (test.reference.clone(), assertions)
        })
        .collect()
}

/// Rewrite a standalone source as the comments of a shell script.
/// Directives and blank lines are kept as they are.
pub fn embed(source: &str) -> String {
    let mut out = String::from("#!/usr/bin/env bash\n");
    for line in source.lines() {
        if line.is_empty() || line.starts_with('#') {
            out.push_str(line);
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
