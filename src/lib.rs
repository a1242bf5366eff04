//! Batspp lexer, parser, and Bats generator.
//!
//! Batspp is a line-oriented language for describing shell tests:
//! commands prefixed with `$`, their expected output on the following
//! lines, and `=>` / `=/>` assertions, grouped by `# Test`, `# Setup`,
//! `# Teardown`, and `# Continuation` directives. This crate turns such
//! sources into a typed `TestsSuite` and renders it as a Bats script.
//!
//! # Quick start
//!
//! ## Parse a Batspp source
//!
//! ```
//! use batspp_rs::{AssertionKind, parse_str};
//!
//! let input = "# Test adds\n$ echo 1+1 | bc\n2\n";
//! let suite = parse_str(input, false).unwrap();
//! assert_eq!(suite.tests[0].reference, "adds");
//! assert_eq!(suite.tests[0].assertions[0].kind, AssertionKind::Output);
//! ```
//!
//! ## Generate a Bats script
//!
//! ```
//! use batspp_rs::{Assertion, GenerateOptions, Test, TestsSuite, generate};
//!
//! let suite = TestsSuite::new()
//!     .test(Test::new("greets").assertion(Assertion::output("echo hi").expect("hi")));
//!
//! let script = generate(&suite, &GenerateOptions::default());
//! assert!(script.contains("@test \"greets\""));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Assertion, AssertionKind, Test, TestsSuite};
pub use generator::{GenerateOptions, generate};
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Location of the offending token.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span,
            Self::Parse(e) => e.span,
        }
    }

    /// Source line the error points at, empty when unknown.
    #[must_use]
    pub fn source_line(&self) -> &str {
        match self {
            Self::Lex(e) => &e.source_line,
            Self::Parse(e) => &e.source_line,
        }
    }
}

/// Tokenize and parse a Batspp source string in one step.
pub fn parse_str(input: &str, embedded: bool) -> Result<TestsSuite, Error> {
    let tokens = tokenize(input, embedded)?;
    Ok(parse(&tokens, embedded)?)
}

/// Tokenize, parse, and render a Batspp source string as a Bats script.
pub fn transpile(input: &str, embedded: bool, options: &GenerateOptions) -> Result<String, Error> {
    let suite = parse_str(input, embedded)?;
    Ok(generate(&suite, options))
}
