use std::fmt;

use crate::token::Span;

/// Complete test suite produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestsSuite {
    pub tests: Vec<Test>,
    /// Commands run before every test.
    pub setup_commands: Vec<String>,
    /// Commands run after every test.
    pub teardown_commands: Vec<String>,
}

/// A named test with its assertions in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    pub reference: String,
    pub assertions: Vec<Assertion>,
    pub span: Span,
}

/// What an assertion compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    /// Run a command and compare its output to the expected text.
    Output,
    /// Left-hand side must equal the right-hand side.
    Equal,
    /// Left-hand side must differ from the right-hand side.
    NotEqual,
}

/// A single check inside a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub kind: AssertionKind,
    /// Commands run right before this assertion.
    pub setup_commands: Vec<String>,
    /// Command segments (`Output`) or left-hand text (`Equal`, `NotEqual`).
    pub actual: Vec<String>,
    /// Expected text, one entry per line.
    pub expected: Vec<String>,
    pub span: Span,
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("output"),
            Self::Equal => f.write_str("equal"),
            Self::NotEqual => f.write_str("not equal"),
        }
    }
}

impl TestsSuite {
    /// Total number of assertions across all tests.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.tests.iter().map(|t| t.assertions.len()).sum()
    }

    /// Find the most recently declared test with the given reference.
    #[must_use]
    pub fn find(&self, reference: &str) -> Option<&Test> {
        self.tests.iter().rev().find(|t| t.reference == reference)
    }
}

impl AssertionKind {
    /// Shell comparison operator used to check this assertion.
    #[must_use]
    pub const fn operator(self) -> &'static str {
        match self {
            Self::Output | Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}
