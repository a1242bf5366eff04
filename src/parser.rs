use std::fmt;

use tracing::{debug, trace};

use crate::ast::{Assertion, AssertionKind, Test, TestsSuite};
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token is none of the kinds the grammar allows here.
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
    },
    /// Continuation block with no back-reference and no prior test.
    ContinuationWithoutTest,
    /// Assertion whose reference matches no open test.
    AssertionReferencedBeforeAssignment { reference: String },
    /// Setup block whose reference never matched a test.
    SetupReferencedBeforeAssignment { reference: String },
    /// Setup directive followed by no command.
    EmptySetup,
    /// Teardown directive followed by no command.
    EmptyTeardown,
    /// Text assertion with no comparison operator.
    UnresolvedAssertionKind { found: TokenKind },
    /// Token stream is empty or does not end with `Eof`.
    MissingEndOfInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected ")?;
                for (i, kind) in expected.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, ", found {found}")
            }
            Self::ContinuationWithoutTest => {
                write!(f, "continuation without test assigned")
            }
            Self::AssertionReferencedBeforeAssignment { reference } => {
                write!(f, "assertion \"{reference}\" referenced before assignment")
            }
            Self::SetupReferencedBeforeAssignment { reference } => {
                write!(f, "setup \"{reference}\" referenced before assignment")
            }
            Self::EmptySetup => write!(f, "setup commands cannot be empty"),
            Self::EmptyTeardown => write!(f, "teardown commands cannot be empty"),
            Self::UnresolvedAssertionKind { found } => {
                write!(f, "expected assertion operator, found {found}")
            }
            Self::MissingEndOfInput => {
                write!(f, "token stream does not end with end of input")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Source line the error points at, empty when unknown.
    pub source_line: String,
}

impl ParseError {
    fn at(kind: ParseErrorKind, token: &Token) -> Self {
        Self {
            kind,
            span: token.span,
            source_line: token.source_line.clone(),
        }
    }
}

/// Parse a token stream into a `TestsSuite` AST.
///
/// `embedded` selects the rules for a test language interleaved with
/// surrounding prose: stray text is skipped and newlines never extend an
/// expected-output paragraph.
///
/// # Errors
///
/// Returns `ParseError` on syntax errors, unresolved test references,
/// or empty setup and teardown blocks. No partial suite is returned.
pub fn parse(tokens: &[Token], embedded: bool) -> Result<TestsSuite, ParseError> {
    Parser::new(tokens, embedded)?.parse()
}

/// Setup commands waiting for the assertion or suite that owns them.
#[derive(Debug)]
struct PendingSetup {
    reference: String,
    commands: Vec<String>,
    span: Span,
    source_line: String,
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    embedded: bool,
    last_reference: Option<String>,
    open_tests: Vec<Test>,
    pending_setups: Vec<PendingSetup>,
    pending_teardowns: Vec<Vec<String>>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], embedded: bool) -> Result<Self, ParseError> {
        match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => Ok(Self {
                tokens,
                pos: 0,
                embedded,
                last_reference: None,
                open_tests: Vec::new(),
                pending_setups: Vec::new(),
                pending_teardowns: Vec::new(),
            }),
            Some(last) => Err(ParseError::at(ParseErrorKind::MissingEndOfInput, last)),
            None => Err(ParseError {
                kind: ParseErrorKind::MissingEndOfInput,
                span: Span { line: 1, column: 1 },
                source_line: String::new(),
            }),
        }
    }

    fn parse(mut self) -> Result<TestsSuite, ParseError> {
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::Comment | TokenKind::Newline => self.pos += 1,
                TokenKind::Test => self.push_test()?,
                TokenKind::Continuation => self.break_continuation()?,
                TokenKind::Setup => self.push_setup_directive()?,
                TokenKind::Teardown => self.push_teardown()?,
                TokenKind::Peso | TokenKind::Text
                    if self.is_command_next() || self.is_assertion_next() =>
                {
                    let reference = format!("test of line {}", token.span.line);
                    trace!(%reference, "inline test");
                    self.open_test(reference.clone(), token.span);
                    self.break_setup_assertion(&reference)?;
                }
                TokenKind::Text if self.embedded => self.pos += 1,
                TokenKind::Eof
                | TokenKind::Text
                | TokenKind::Pointer
                | TokenKind::Peso
                | TokenKind::Greater
                | TokenKind::AssertEq
                | TokenKind::AssertNe => break,
            }
        }

        self.expect(TokenKind::Eof)?;
        self.finish()
    }

    // -- Cursor --------------------------------------------------------

    fn current(&self) -> &'a Token {
        self.peek(0)
    }

    /// Look `offset` tokens ahead. Positions past the end resolve to
    /// the final `Eof` token.
    fn peek(&self, offset: usize) -> &'a Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    fn peek_kind(&self, offset: usize) -> TokenKind {
        self.peek(offset).kind
    }

    /// Consume the current token if it has the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.expect_one_of(&[kind])
    }

    /// Consume the current token if its kind is one of `kinds`.
    fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<&'a Token, ParseError> {
        let token = self.current();
        if kinds.contains(&token.kind) {
            trace!(kind = %token.kind, line = token.span.line, "consume");
            if token.kind != TokenKind::Eof {
                self.pos += 1;
            }
            Ok(token)
        } else {
            Err(ParseError::at(
                ParseErrorKind::UnexpectedToken {
                    expected: kinds.to_vec(),
                    found: token.kind,
                },
                token,
            ))
        }
    }

    // -- Lookahead -----------------------------------------------------

    /// `Peso Text`
    fn is_command_next(&self) -> bool {
        self.peek_kind(0) == TokenKind::Peso && self.peek_kind(1) == TokenKind::Text
    }

    /// `Peso Text (Greater Text)* Text`
    fn is_command_assertion_next(&self) -> bool {
        if !self.is_command_next() {
            return false;
        }

        let mut ahead = 2;
        while self.peek_kind(ahead) == TokenKind::Greater
            && self.peek_kind(ahead + 1) == TokenKind::Text
        {
            ahead += 2;
        }

        let result = self.peek_kind(ahead) == TokenKind::Text;
        trace!(result, "command assertion lookahead");
        result
    }

    /// A command whose output is not asserted.
    fn is_setup_command_next(&self) -> bool {
        self.is_command_next() && !self.is_command_assertion_next()
    }

    /// `Text (AssertEq|AssertNe) Text`, starting `offset` tokens ahead.
    fn is_arrow_assertion_next(&self, offset: usize) -> bool {
        self.peek_kind(offset) == TokenKind::Text
            && matches!(
                self.peek_kind(offset + 1),
                TokenKind::AssertEq | TokenKind::AssertNe
            )
            && self.peek_kind(offset + 2) == TokenKind::Text
    }

    fn is_assertion_next(&self) -> bool {
        self.is_command_assertion_next() || self.is_arrow_assertion_next(0)
    }

    /// Whether the current token extends an expected-output paragraph.
    fn is_text_paragraph_next(&self) -> bool {
        let kind = self.peek_kind(0);
        let accepted = match kind {
            TokenKind::Text => true,
            TokenKind::Newline => {
                !self.embedded
                    && matches!(self.peek_kind(1), TokenKind::Text | TokenKind::Newline)
            }
            _ => false,
        };
        accepted && !self.is_arrow_assertion_next(1)
    }

    // -- Tests and continuations ---------------------------------------

    fn open_test(&mut self, reference: String, span: Span) {
        self.open_tests.push(Test {
            reference,
            assertions: Vec::new(),
            span,
        });
    }

    fn push_test(&mut self) -> Result<(), ParseError> {
        let directive = self.expect(TokenKind::Test)?;
        let label = self.expect(TokenKind::Text)?;
        let reference = label.text.trim().to_string();
        trace!(%reference, "test directive");

        self.last_reference = Some(reference.clone());
        self.open_test(reference.clone(), directive.span);
        self.break_setup_assertion(&reference)
    }

    fn break_continuation(&mut self) -> Result<(), ParseError> {
        let directive = self.expect(TokenKind::Continuation)?;

        let reference = match self.back_reference()? {
            Some(reference) => reference,
            None => self.last_reference.clone().ok_or_else(|| {
                ParseError::at(ParseErrorKind::ContinuationWithoutTest, directive)
            })?,
        };

        trace!(%reference, "continuation");
        self.break_setup_assertion(&reference)
    }

    /// Consume an optional `Pointer Text` pair.
    fn back_reference(&mut self) -> Result<Option<String>, ParseError> {
        if self.peek_kind(0) != TokenKind::Pointer {
            return Ok(None);
        }
        self.expect(TokenKind::Pointer)?;
        let label = self.expect(TokenKind::Text)?;
        Ok(Some(label.text.trim().to_string()))
    }

    /// Split the block that follows a test or continuation into setup
    /// commands and assertions bound to `reference`.
    fn break_setup_assertion(&mut self, reference: &str) -> Result<(), ParseError> {
        let mut last_was_setup = false;

        loop {
            if last_was_setup && self.peek_kind(0) == TokenKind::Newline {
                self.expect(TokenKind::Newline)?;
            } else if self.is_setup_command_next() {
                let start = self.current();
                let commands = self.extract_command()?;
                self.pending_setups.push(PendingSetup {
                    reference: reference.to_string(),
                    commands,
                    span: start.span,
                    source_line: start.source_line.clone(),
                });
                last_was_setup = true;
            } else if self.is_assertion_next() {
                self.build_assertion(reference)?;
                last_was_setup = false;
            } else {
                return Ok(());
            }
        }
    }

    // -- Setup and teardown --------------------------------------------

    fn push_setup_directive(&mut self) -> Result<(), ParseError> {
        let directive = self.expect(TokenKind::Setup)?;

        // Explicit back-reference, else the last declared test, else global.
        let reference = match self.back_reference()? {
            Some(reference) => reference,
            None => self.last_reference.clone().unwrap_or_default(),
        };

        let commands = self.extract_commands()?;
        if commands.is_empty() {
            return Err(ParseError::at(ParseErrorKind::EmptySetup, directive));
        }

        trace!(%reference, count = commands.len(), "setup directive");
        self.pending_setups.push(PendingSetup {
            reference,
            commands,
            span: directive.span,
            source_line: directive.source_line.clone(),
        });
        Ok(())
    }

    fn push_teardown(&mut self) -> Result<(), ParseError> {
        let directive = self.expect(TokenKind::Teardown)?;
        let commands = self.extract_commands()?;
        if commands.is_empty() {
            return Err(ParseError::at(ParseErrorKind::EmptyTeardown, directive));
        }

        trace!(count = commands.len(), "teardown directive");
        self.pending_teardowns.push(commands);
        Ok(())
    }

    /// Remove every pending setup bound to `reference`, merging their
    /// commands in declaration order.
    fn pop_setup_commands(&mut self, reference: &str) -> Vec<String> {
        let mut commands = Vec::new();
        self.pending_setups.retain_mut(|pending| {
            if pending.reference == reference {
                commands.append(&mut pending.commands);
                false
            } else {
                true
            }
        });
        commands
    }

    // -- Commands and text ---------------------------------------------

    /// `Peso Text (Greater Text)*`
    fn extract_command(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(TokenKind::Peso)?;
        let mut segments = vec![self.expect(TokenKind::Text)?.text.clone()];

        while self.peek_kind(0) == TokenKind::Greater {
            self.expect(TokenKind::Greater)?;
            segments.push(self.expect(TokenKind::Text)?.text.clone());
        }

        Ok(segments)
    }

    fn extract_commands(&mut self) -> Result<Vec<String>, ParseError> {
        let mut commands = Vec::new();
        while self.is_setup_command_next() {
            commands.extend(self.extract_command()?);
        }
        Ok(commands)
    }

    /// Consume an expected-output paragraph. Each text token is a line
    /// and each accepted newline is an empty line; trailing empty lines
    /// only separate blocks and are dropped.
    fn extract_text_lines(&mut self) -> Result<Vec<String>, ParseError> {
        let mut lines = Vec::new();

        while self.is_text_paragraph_next() {
            let token = self.expect_one_of(&[TokenKind::Text, TokenKind::Newline])?;
            lines.push(token.text.clone());
        }

        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        Ok(lines)
    }

    // -- Assertions ----------------------------------------------------

    fn build_assertion(&mut self, reference: &str) -> Result<(), ParseError> {
        let start = self.current();

        // Dispatch on the first token only: the compound lookahead would
        // misread the end of a paragraph as a new assertion.
        let (kind, actual) = match start.kind {
            TokenKind::Peso => (AssertionKind::Output, self.extract_command()?),
            TokenKind::Text => {
                let actual = vec![self.expect(TokenKind::Text)?.text.clone()];
                let operator = self.current();
                let kind = match operator.kind {
                    TokenKind::AssertEq => AssertionKind::Equal,
                    TokenKind::AssertNe => AssertionKind::NotEqual,
                    found => {
                        return Err(ParseError::at(
                            ParseErrorKind::UnresolvedAssertionKind { found },
                            operator,
                        ));
                    }
                };
                self.pos += 1;
                (kind, actual)
            }
            found => {
                return Err(ParseError::at(
                    ParseErrorKind::UnexpectedToken {
                        expected: vec![TokenKind::Peso, TokenKind::Text],
                        found,
                    },
                    start,
                ));
            }
        };

        let expected = self.extract_text_lines()?;
        let assertion = Assertion {
            kind,
            setup_commands: self.pop_setup_commands(reference),
            actual,
            expected,
            span: start.span,
        };

        trace!(%reference, %kind, "assertion");
        self.attach_assertion(assertion, reference, start)
    }

    /// Attach to the most recently opened test matching `reference`.
    fn attach_assertion(
        &mut self,
        assertion: Assertion,
        reference: &str,
        start: &Token,
    ) -> Result<(), ParseError> {
        match self
            .open_tests
            .iter_mut()
            .rev()
            .find(|test| test.reference == reference)
        {
            Some(test) => {
                test.assertions.push(assertion);
                Ok(())
            }
            None => Err(ParseError::at(
                ParseErrorKind::AssertionReferencedBeforeAssignment {
                    reference: reference.to_string(),
                },
                start,
            )),
        }
    }

    // -- Finalization --------------------------------------------------

    fn finish(mut self) -> Result<TestsSuite, ParseError> {
        let setup_commands = self.pop_setup_commands("");
        let teardown_commands = self.pending_teardowns.drain(..).flatten().collect();

        if let Some(pending) = self.pending_setups.first() {
            return Err(ParseError {
                kind: ParseErrorKind::SetupReferencedBeforeAssignment {
                    reference: pending.reference.clone(),
                },
                span: pending.span,
                source_line: pending.source_line.clone(),
            });
        }

        let suite = TestsSuite {
            tests: self.open_tests,
            setup_commands,
            teardown_commands,
        };
        debug!(
            tests = suite.tests.len(),
            assertions = suite.assertion_count(),
            setup = suite.setup_commands.len(),
            teardown = suite.teardown_commands.len(),
            "built tests suite"
        );
        Ok(suite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_input(input: &str) -> Result<TestsSuite, ParseError> {
        let tokens = tokenize(input, false).expect("tokenize failed");
        parse(&tokens, false)
    }

    fn tok(kind: TokenKind, text: &str, line: usize) -> Token {
        Token::new(kind, text, line, 1)
    }

    #[test]
    fn named_test_with_output_assertion() {
        let suite = parse_input("# Test adds\n$ echo 1+1 | bc\n2\n").expect("parse failed");
        assert_eq!(suite.tests.len(), 1);
        let test = &suite.tests[0];
        assert_eq!(test.reference, "adds");
        assert_eq!(test.assertions.len(), 1);
        let assertion = &test.assertions[0];
        assert_eq!(assertion.kind, AssertionKind::Output);
        assert_eq!(assertion.actual, vec!["echo 1+1 | bc"]);
        assert_eq!(assertion.expected, vec!["2"]);
    }

    #[test]
    fn inline_equal_assertion() {
        let suite = parse_input("left == right").expect("parse failed");
        assert_eq!(suite.tests.len(), 1);
        assert_eq!(suite.tests[0].reference, "test of line 1");
        let assertion = &suite.tests[0].assertions[0];
        assert_eq!(assertion.kind, AssertionKind::Equal);
        assert_eq!(assertion.actual, vec!["left"]);
        assert_eq!(assertion.expected, vec!["right"]);
    }

    #[test]
    fn chained_commands_without_output_are_setup() {
        let tokens = vec![
            tok(TokenKind::Setup, "setup", 1),
            tok(TokenKind::Peso, "$", 2),
            tok(TokenKind::Text, "a", 2),
            tok(TokenKind::Peso, "$", 3),
            tok(TokenKind::Text, "b", 3),
            tok(TokenKind::Eof, "", 4),
        ];
        let suite = parse(&tokens, false).expect("parse failed");
        assert!(suite.tests.is_empty());
        assert_eq!(suite.setup_commands, vec!["a", "b"]);
    }

    #[test]
    fn continued_command_with_output_is_one_assertion() {
        let tokens = vec![
            tok(TokenKind::Peso, "$", 1),
            tok(TokenKind::Text, "echo a \\", 1),
            tok(TokenKind::Greater, ">", 2),
            tok(TokenKind::Text, "b", 2),
            tok(TokenKind::Text, "a b", 3),
            tok(TokenKind::Eof, "", 4),
        ];
        let suite = parse(&tokens, false).expect("parse failed");
        let assertion = &suite.tests[0].assertions[0];
        assert_eq!(assertion.kind, AssertionKind::Output);
        assert_eq!(assertion.actual, vec!["echo a \\", "b"]);
        assert_eq!(assertion.expected, vec!["a b"]);
    }

    #[test]
    fn multi_line_paragraph_keeps_blank_lines() {
        let suite = parse_input("$ printf 'a\\n\\nb'\na\n\nb\n\n\n# Test next\n$ true\nx\n")
            .expect("parse failed");
        assert_eq!(suite.tests[0].assertions[0].expected, vec!["a", "", "b"]);
        assert_eq!(suite.tests[1].reference, "next");
    }

    #[test]
    fn arrow_after_paragraph_starts_inline_test() {
        let suite = parse_input("# Test t\n$ echo a\na\nb => b\n").expect("parse failed");
        assert_eq!(suite.tests.len(), 2);
        assert_eq!(suite.tests[0].assertions[0].expected, vec!["a"]);
        let inline = &suite.tests[1];
        assert_eq!(inline.reference, "test of line 4");
        assert_eq!(inline.assertions[0].kind, AssertionKind::Equal);
    }

    #[test]
    fn setup_inside_test_block_attaches_to_next_assertion() {
        let suite = parse_input("# Test t\n$ cd /tmp\n$ pwd\n/tmp\n").expect("parse failed");
        let assertion = &suite.tests[0].assertions[0];
        assert_eq!(assertion.setup_commands, vec!["cd /tmp"]);
        assert_eq!(assertion.actual, vec!["pwd"]);
    }

    #[test]
    fn forward_setup_resolves_once_test_is_declared() {
        let suite = parse_input("# Setup of later\n$ export X=1\n\n# Test later\n$ echo $X\n1\n")
            .expect("parse failed");
        assert!(suite.setup_commands.is_empty());
        assert_eq!(
            suite.tests[0].assertions[0].setup_commands,
            vec!["export X=1"]
        );
    }

    #[test]
    fn continuation_extends_last_test() {
        let suite = parse_input(
            "# Test first\n$ echo 1\n1\n\n# Setup\n$ cd /\n\n# Continuation\n$ pwd\n/\n",
        )
        .expect("parse failed");
        let test = &suite.tests[0];
        assert_eq!(test.assertions.len(), 2);
        assert_eq!(test.assertions[1].setup_commands, vec!["cd /"]);
    }

    #[test]
    fn continuation_with_back_reference() {
        let suite = parse_input(
            "# Test a\n$ echo a\na\n\n# Test b\n$ echo b\nb\n\n# Continuation of a\n$ echo again\nagain\n",
        )
        .expect("parse failed");
        assert_eq!(suite.tests[0].assertions.len(), 2);
        assert_eq!(suite.tests[1].assertions.len(), 1);
    }

    #[test]
    fn continuation_without_test() {
        let err = parse_input("# Continuation\n$ echo a\na\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ContinuationWithoutTest);
        assert_eq!(err.span.line, 1);
    }

    #[test]
    fn continuation_to_unknown_test() {
        let err = parse_input("# Continuation of ghost\n$ echo a\na\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::AssertionReferencedBeforeAssignment {
                reference: "ghost".to_string()
            }
        );
    }

    #[test]
    fn dangling_setup_is_an_error() {
        let err = parse_input("# Setup of ghost\n$ touch file\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::SetupReferencedBeforeAssignment {
                reference: "ghost".to_string()
            }
        );
        assert_eq!(err.source_line, "# Setup of ghost");
    }

    #[test]
    fn empty_setup_and_teardown() {
        let err = parse_input("# Setup\n\n$ echo a\na\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptySetup);
        let err = parse_input("# Teardown\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyTeardown);
    }

    #[test]
    fn teardown_is_global() {
        let suite = parse_input("# Test t\n$ echo a\na\n\n# Teardown\n$ rm -f a\n$ rm -f b\n")
            .expect("parse failed");
        assert_eq!(suite.teardown_commands, vec!["rm -f a", "rm -f b"]);
    }

    #[test]
    fn stray_text_is_a_syntax_error() {
        let err = parse_input("just words\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: vec![TokenKind::Eof],
                found: TokenKind::Text,
            }
        );
    }

    #[test]
    fn embedded_mode_skips_stray_text() {
        let tokens = tokenize("# Helpers for greetings.\necho code\n# $ echo hi\n# hi\nmore code\n# See README.\n", true)
            .expect("tokenize");
        let suite = parse(&tokens, true).expect("parse failed");
        assert_eq!(suite.tests.len(), 1);
        assert_eq!(suite.tests[0].reference, "test of line 3");
        assert_eq!(suite.tests[0].assertions[0].expected, vec!["hi"]);
    }

    #[test]
    fn missing_eof() {
        let tokens = vec![tok(TokenKind::Text, "a", 1)];
        let err = parse(&tokens, false).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingEndOfInput);
        let err = parse(&[], false).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingEndOfInput);
    }

    #[test]
    fn duplicate_references_resolve_to_newest() {
        let suite = parse_input(
            "# Test dup\n$ echo 1\n1\n\n# Test dup\n$ echo 2\n2\n\n# Continuation of dup\n$ echo 3\n3\n",
        )
        .expect("parse failed");
        assert_eq!(suite.tests[0].assertions.len(), 1);
        assert_eq!(suite.tests[1].assertions.len(), 2);
    }
}
