//! Line-oriented lexer for Batspp sources.
//!
//! Every line is classified once (blank, directive, comment, command,
//! command continuation, arrow assertion, text, code), then turned into
//! tokens. Blank lines, and the shell code of an embedded script, become
//! newline tokens. Other lines emit no trailing newline, except where a
//! text line must be kept apart from a following arrow assertion.

use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `$` with no command after it.
    EmptyCommand,
    /// Directive that needs a test label but has none.
    MissingReference { directive: &'static str },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "empty command after '$'"),
            Self::MissingReference { directive } => {
                write!(f, "missing test reference after '{directive}'")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub source_line: String,
}

/// Tokenize a Batspp source string into a sequence of tokens.
///
/// With `embedded` set, the test language is read from `#` comments
/// of a shell script and every other line is treated as free text.
/// The returned sequence always ends with an `Eof` token.
///
/// # Errors
///
/// Returns `LexError` on empty commands or directives missing their
/// test reference.
pub fn tokenize(input: &str, embedded: bool) -> Result<Vec<Token>, LexError> {
    Lexer::new(input, embedded).tokenize()
}

const EQ_OPERATORS: [&str; 2] = ["=>", "=="];
const NE_OPERATORS: [&str; 2] = ["=/>", "!="];

/// A source line after classification. Offsets are byte offsets into
/// the raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Blank,
    Comment,
    Directive {
        kind: TokenKind,
        offset: usize,
        pointer: Option<usize>,
        label: Option<(usize, &'a str)>,
    },
    Command {
        offset: usize,
        text: (usize, &'a str),
    },
    CommandContinuation {
        offset: usize,
        text: (usize, &'a str),
    },
    Arrow {
        lhs: (usize, &'a str),
        operator: (usize, &'a str),
        kind: TokenKind,
        rhs: (usize, &'a str),
    },
    Text(usize, &'a str),
    /// Shell code around embedded tests; separates blocks like a blank line.
    Code(usize),
}

struct Lexer<'a> {
    lines: Vec<&'a str>,
    embedded: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str, embedded: bool) -> Self {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        Self {
            lines: input.lines().collect(),
            embedded,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let classified = self.classify()?;

        for (idx, line) in classified.iter().enumerate() {
            let raw = self.lines[idx];
            let number = idx + 1;

            match *line {
                Line::Skip => {}
                Line::Blank => self.push(TokenKind::Newline, "", number, raw, raw.len()),
                Line::Comment => self.push(TokenKind::Comment, raw.trim(), number, raw, 0),
                Line::Directive {
                    kind,
                    offset,
                    pointer,
                    label,
                } => {
                    let keyword = raw[offset..].split_whitespace().next().unwrap_or_default();
                    self.push(kind, keyword, number, raw, offset);
                    if let Some(at) = pointer {
                        self.push(TokenKind::Pointer, "of", number, raw, at);
                    }
                    if let Some((at, text)) = label {
                        self.push(TokenKind::Text, text, number, raw, at);
                    }
                }
                Line::Command { offset, text } => {
                    self.push(TokenKind::Peso, "$", number, raw, offset);
                    self.push(TokenKind::Text, text.1, number, raw, text.0);
                }
                Line::CommandContinuation { offset, text } => {
                    self.push(TokenKind::Greater, ">", number, raw, offset);
                    self.push(TokenKind::Text, text.1, number, raw, text.0);
                }
                Line::Arrow {
                    lhs,
                    operator,
                    kind,
                    rhs,
                } => {
                    self.push(TokenKind::Text, lhs.1, number, raw, lhs.0);
                    self.push(kind, operator.1, number, raw, operator.0);
                    self.push(TokenKind::Text, rhs.1, number, raw, rhs.0);
                    if needs_separator(classified.get(idx + 1)) {
                        self.push(TokenKind::Newline, "", number, raw, raw.len());
                    }
                }
                Line::Text(at, text) => {
                    self.push(TokenKind::Text, text, number, raw, at);
                    if needs_separator(classified.get(idx + 1)) {
                        self.push(TokenKind::Newline, "", number, raw, raw.len());
                    }
                }
                Line::Code(at) => self.push(TokenKind::Newline, "", number, raw, at),
            }
        }

        let eof_line = self.lines.len() + 1;
        self.tokens.push(Token::new(TokenKind::Eof, "", eof_line, 1));
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, text: &str, line: usize, raw: &str, offset: usize) {
        let column = raw[..offset].chars().count() + 1;
        self.tokens
            .push(Token::new(kind, text, line, column).with_source_line(raw));
    }

    fn classify(&self) -> Result<Vec<Line<'a>>, LexError> {
        let mut classified = Vec::with_capacity(self.lines.len());
        let mut in_command = false;

        for (idx, raw) in self.lines.iter().copied().enumerate() {
            let line = if self.embedded {
                Self::classify_embedded(raw, idx, in_command)
            } else {
                Self::classify_standalone(raw, in_command)
            }
            .map_err(|(kind, offset)| LexError {
                kind,
                span: Span {
                    line: idx + 1,
                    column: raw[..offset].chars().count() + 1,
                },
                source_line: raw.to_string(),
            })?;

            in_command = matches!(
                line,
                Line::Command { .. } | Line::CommandContinuation { .. }
            );
            classified.push(line);
        }

        Ok(classified)
    }

    fn classify_standalone(
        raw: &'a str,
        in_command: bool,
    ) -> Result<Line<'a>, (LexErrorKind, usize)> {
        let start = raw.len() - raw.trim_start().len();
        let trimmed = &raw[start..];

        if trimmed.is_empty() {
            return Ok(Line::Blank);
        }
        if trimmed.starts_with('#') {
            return Ok(Self::directive(raw, start)?.unwrap_or(Line::Comment));
        }
        Self::body(raw, start, in_command)
    }

    fn classify_embedded(
        raw: &'a str,
        idx: usize,
        in_command: bool,
    ) -> Result<Line<'a>, (LexErrorKind, usize)> {
        let start = raw.len() - raw.trim_start().len();
        let trimmed = &raw[start..];

        if trimmed.is_empty() {
            return Ok(Line::Blank);
        }
        if idx == 0 && trimmed.starts_with("#!") {
            return Ok(Line::Skip);
        }
        if !trimmed.starts_with('#') {
            return Ok(Line::Code(start));
        }
        if let Some(directive) = Self::directive(raw, start)? {
            return Ok(directive);
        }

        // Strip the comment marker and a single separating space.
        let mut body = start + 1;
        if raw[body..].starts_with(' ') {
            body += 1;
        }
        if raw[body..].trim().is_empty() {
            return Ok(Line::Blank);
        }
        Self::body(raw, body, in_command)
    }

    /// Classify the part of a line that holds commands, assertions, or
    /// expected output, starting at byte offset `start`.
    fn body(raw: &'a str, start: usize, in_command: bool) -> Result<Line<'a>, (LexErrorKind, usize)> {
        let content = &raw[start..];
        let lead = content.len() - content.trim_start().len();
        let marker = start + lead;
        let trimmed = content.trim_start();

        if let Some(rest) = strip_marker(trimmed, '$') {
            let text = trimmed_at(raw, marker + 1, rest);
            if text.1.is_empty() {
                return Err((LexErrorKind::EmptyCommand, marker));
            }
            return Ok(Line::Command {
                offset: marker,
                text,
            });
        }

        if in_command {
            if let Some(rest) = strip_marker(trimmed, '>') {
                return Ok(Line::CommandContinuation {
                    offset: marker,
                    text: trimmed_at(raw, marker + 1, rest),
                });
            }
        }

        if let Some(arrow) = Self::arrow(raw, start) {
            return Ok(arrow);
        }

        Ok(Line::Text(start, content.trim_end()))
    }

    fn arrow(raw: &'a str, start: usize) -> Option<Line<'a>> {
        let content = &raw[start..];
        let (at, operator, kind) = EQ_OPERATORS
            .iter()
            .map(|op| (*op, TokenKind::AssertEq))
            .chain(NE_OPERATORS.iter().map(|op| (*op, TokenKind::AssertNe)))
            .filter_map(|(op, kind)| {
                find_operator(content, op).map(|at| (start + at, op, kind))
            })
            .min_by_key(|(at, _, _)| *at)?;

        let lhs = raw[start..at].trim();
        let rhs_start = at + operator.len();
        let rhs = trimmed_at(raw, rhs_start, &raw[rhs_start..]);
        if lhs.is_empty() || rhs.1.is_empty() {
            return None;
        }

        let lhs_offset = start + (raw[start..at].len() - raw[start..at].trim_start().len());
        Some(Line::Arrow {
            lhs: (lhs_offset, lhs),
            operator: (at, operator),
            kind,
            rhs,
        })
    }

    /// Recognize `# Test`, `# Continuation`, `# Setup`, and `# Teardown`.
    /// Returns `Ok(None)` for any other comment.
    fn directive(raw: &'a str, start: usize) -> Result<Option<Line<'a>>, (LexErrorKind, usize)> {
        let after_hash = start + 1;
        let offset = after_hash + (raw[after_hash..].len() - raw[after_hash..].trim_start().len());
        let content = &raw[offset..];
        let keyword_len = content
            .find(char::is_whitespace)
            .unwrap_or(content.len());
        let keyword = content[..keyword_len].to_ascii_lowercase();

        let (kind, name) = match keyword.as_str() {
            "test" => (TokenKind::Test, "test"),
            "continuation" | "continue" => (TokenKind::Continuation, "continuation"),
            "setup" => (TokenKind::Setup, "setup"),
            "teardown" => (TokenKind::Teardown, "teardown"),
            _ => return Ok(None),
        };

        let rest_start = offset + keyword_len;
        let rest = trimmed_at(raw, rest_start, &raw[rest_start..]);

        match kind {
            TokenKind::Test => {
                if rest.1.is_empty() {
                    return Err((LexErrorKind::MissingReference { directive: name }, offset));
                }
                Ok(Some(Line::Directive {
                    kind,
                    offset,
                    pointer: None,
                    label: Some(rest),
                }))
            }
            TokenKind::Continuation | TokenKind::Setup => {
                let Some(after_of) = strip_keyword(rest.1, "of") else {
                    return Ok(Some(Line::Directive {
                        kind,
                        offset,
                        pointer: None,
                        label: None,
                    }));
                };
                let label_start = rest.0 + (rest.1.len() - after_of.len());
                let label = trimmed_at(raw, label_start, after_of);
                if label.1.is_empty() {
                    return Err((LexErrorKind::MissingReference { directive: name }, rest.0));
                }
                Ok(Some(Line::Directive {
                    kind,
                    offset,
                    pointer: Some(rest.0),
                    label: Some(label),
                }))
            }
            _ => Ok(Some(Line::Directive {
                kind,
                offset,
                pointer: None,
                label: None,
            })),
        }
    }
}

/// Text and arrow lines are closed by a newline only when the next line
/// is an arrow line, which starts a new assertion.
fn needs_separator(next: Option<&Line<'_>>) -> bool {
    matches!(next, Some(Line::Arrow { .. }))
}

/// Strip a single-character marker that must be followed by whitespace
/// or the end of the line.
fn strip_marker(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix(marker)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Case-insensitive keyword prefix followed by whitespace or end of text.
fn strip_keyword<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &text[keyword.len()..];
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Trim `text` (a suffix of `raw` starting at `offset`) and return the
/// offset of the trimmed start together with the trimmed text.
fn trimmed_at<'t>(raw: &'t str, offset: usize, text: &'t str) -> (usize, &'t str) {
    let lead = text.len() - text.trim_start().len();
    let start = offset + lead;
    let trimmed = text.trim();
    debug_assert!(raw[start..].starts_with(trimmed));
    (start, trimmed)
}

/// Find an assertion operator surrounded by whitespace.
fn find_operator(content: &str, operator: &str) -> Option<usize> {
    content.match_indices(operator).map(|(at, _)| at).find(|&at| {
        let before = content[..at].chars().next_back();
        let after = content[at + operator.len()..].chars().next();
        before.is_some_and(char::is_whitespace) && after.is_some_and(char::is_whitespace)
    })
}
