use crate::ast::{Assertion, AssertionKind, Test, TestsSuite};
use crate::token::Span;

const BUILT: Span = Span { line: 0, column: 0 };

impl TestsSuite {
    /// Create a new empty suite.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tests: Vec::new(),
            setup_commands: Vec::new(),
            teardown_commands: Vec::new(),
        }
    }

    /// Add a test.
    #[must_use]
    pub fn test(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    /// Add a global setup command, run before every test.
    #[must_use]
    pub fn setup(mut self, command: &str) -> Self {
        self.setup_commands.push(command.to_string());
        self
    }

    /// Add a global teardown command, run after every test.
    #[must_use]
    pub fn teardown(mut self, command: &str) -> Self {
        self.teardown_commands.push(command.to_string());
        self
    }
}

impl Default for TestsSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Test {
    /// Create a new test with the given reference.
    #[must_use]
    pub fn new(reference: &str) -> Self {
        Self {
            reference: reference.to_string(),
            assertions: Vec::new(),
            span: BUILT,
        }
    }

    /// Add an assertion.
    #[must_use]
    pub fn assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }
}

impl Assertion {
    fn new(kind: AssertionKind, actual: &str) -> Self {
        Self {
            kind,
            setup_commands: Vec::new(),
            actual: vec![actual.to_string()],
            expected: Vec::new(),
            span: BUILT,
        }
    }

    /// Assert on the output of a command.
    #[must_use]
    pub fn output(command: &str) -> Self {
        Self::new(AssertionKind::Output, command)
    }

    /// Assert that `actual` equals the expected text.
    #[must_use]
    pub fn equal(actual: &str) -> Self {
        Self::new(AssertionKind::Equal, actual)
    }

    /// Assert that `actual` differs from the expected text.
    #[must_use]
    pub fn not_equal(actual: &str) -> Self {
        Self::new(AssertionKind::NotEqual, actual)
    }

    /// Continue the command on another line.
    #[must_use]
    pub fn continued(mut self, segment: &str) -> Self {
        self.actual.push(segment.to_string());
        self
    }

    /// Add a command run right before this assertion.
    #[must_use]
    pub fn setup(mut self, command: &str) -> Self {
        self.setup_commands.push(command.to_string());
        self
    }

    /// Add an expected line.
    #[must_use]
    pub fn expect(mut self, line: &str) -> Self {
        self.expected.push(line.to_string());
        self
    }

    /// Add several expected lines, split on newlines.
    #[must_use]
    pub fn expect_text(mut self, text: &str) -> Self {
        self.expected.extend(text.lines().map(str::to_string));
        self
    }
}
