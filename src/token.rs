use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input, always the last token.
    Eof,
    /// Free text: a command, a reference label, or an output line.
    Text,
    /// Blank line, or the separator closing a text line.
    Newline,
    /// Comment line (`# ...`) that is not a directive.
    Comment,
    /// `# Test` directive.
    Test,
    /// `# Continuation` directive.
    Continuation,
    /// `# Setup` directive.
    Setup,
    /// `# Teardown` directive.
    Teardown,
    /// Back-reference marker (`of`).
    Pointer,
    /// Command marker (`$`).
    Peso,
    /// Command continuation marker (`>`).
    Greater,
    /// Equality operator (`=>` or `==`).
    AssertEq,
    /// Inequality operator (`=/>` or `!=`).
    AssertNe,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "end of input",
            Self::Text => "text",
            Self::Newline => "newline",
            Self::Comment => "comment",
            Self::Test => "test directive",
            Self::Continuation => "continuation directive",
            Self::Setup => "setup directive",
            Self::Teardown => "teardown directive",
            Self::Pointer => "'of'",
            Self::Peso => "'$'",
            Self::Greater => "'>'",
            Self::AssertEq => "'=>'",
            Self::AssertNe => "'=/>'",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    /// The full source line the token was read from.
    pub source_line: String,
}

impl Token {
    /// Create a token with no source line attached.
    #[must_use]
    pub fn new(kind: TokenKind, text: &str, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span: Span { line, column },
            source_line: String::new(),
        }
    }

    /// Attach the source line the token came from.
    #[must_use]
    pub fn with_source_line(mut self, source_line: &str) -> Self {
        self.source_line = source_line.to_string();
        self
    }
}
