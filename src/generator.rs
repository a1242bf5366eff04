//! Code generator that renders a `TestsSuite` into a Bats script.
//!
//! Every test becomes one `@test` block. Assertions capture the actual
//! and expected text with command substitution, so trailing newlines
//! are ignored on both sides of the comparison.

use std::fmt::Write as _;

use tracing::debug;

use crate::ast::{Assertion, Test, TestsSuite};

const HEREDOC_MARKER: &str = "BATSPP_EXPECTED";

/// Settings for `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Source file name shown in the header comment.
    pub source: Option<String>,
    /// Shell script sourced before every test, so tests embedded in it
    /// can call the functions it defines. Should be an absolute path.
    pub source_script: Option<String>,
    /// Run every test inside a fresh temporary directory.
    pub sandbox: bool,
    /// Directory under which sandboxes are created.
    pub temp_root: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            source: None,
            source_script: None,
            sandbox: true,
            temp_root: "/tmp".to_string(),
        }
    }
}

impl GenerateOptions {
    /// Name the source file in the generated header.
    #[must_use]
    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Source `script` at the start of `setup()`.
    #[must_use]
    pub fn source_script(mut self, script: &str) -> Self {
        self.source_script = Some(script.to_string());
        self
    }

    /// Enable or disable per-test temporary directories.
    #[must_use]
    pub const fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the directory under which sandboxes are created.
    #[must_use]
    pub fn temp_root(mut self, root: &str) -> Self {
        self.temp_root = root.to_string();
        self
    }
}

/// Render a `TestsSuite` AST into a Bats test script.
#[must_use]
pub fn generate(suite: &TestsSuite, options: &GenerateOptions) -> String {
    let mut out = String::new();

    write_header(&mut out, options);
    write_setup(&mut out, suite, options);
    write_teardown(&mut out, suite, options);

    for test in &suite.tests {
        out.push('\n');
        write_test(&mut out, test);
    }

    debug!(
        tests = suite.tests.len(),
        bytes = out.len(),
        "generated bats script"
    );
    out
}

fn write_header(out: &mut String, options: &GenerateOptions) {
    out.push_str("#!/usr/bin/env bats\n#\n");
    match &options.source {
        Some(source) => {
            let _ = writeln!(out, "# Generated by batspp from {source}.");
        }
        None => out.push_str("# Generated by batspp.\n"),
    }
    out.push_str("#\n");
}

fn write_setup(out: &mut String, suite: &TestsSuite, options: &GenerateOptions) {
    if suite.setup_commands.is_empty() && !options.sandbox && options.source_script.is_none() {
        return;
    }

    out.push_str("\nsetup() {\n");
    // Sourced before the sandbox `cd`, while relative paths still resolve.
    if let Some(script) = &options.source_script {
        let _ = writeln!(out, "\tsource \"{}\"", escape_double_quoted(script));
    }
    if options.sandbox {
        let root = options.temp_root.trim_end_matches('/');
        let _ = writeln!(
            out,
            "\tBATSPP_DIR=\"$(mktemp -d \"{}/batspp.XXXXXX\")\"",
            escape_double_quoted(root)
        );
        out.push_str("\tcd \"$BATSPP_DIR\" || return 1\n");
    }
    write_commands(out, &suite.setup_commands, 1);
    out.push_str("}\n");
}

fn write_teardown(out: &mut String, suite: &TestsSuite, options: &GenerateOptions) {
    if suite.teardown_commands.is_empty() && !options.sandbox {
        return;
    }

    out.push_str("\nteardown() {\n");
    write_commands(out, &suite.teardown_commands, 1);
    if options.sandbox {
        out.push_str("\tcd / && rm -rf \"$BATSPP_DIR\"\n");
    }
    out.push_str("}\n");
}

fn write_test(out: &mut String, test: &Test) {
    let _ = writeln!(out, "@test \"{}\" {{", escape_double_quoted(&test.reference));

    for (i, assertion) in test.assertions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_assertion(out, assertion);
    }

    out.push_str("}\n");
}

fn write_assertion(out: &mut String, assertion: &Assertion) {
    if assertion.span.line > 0 {
        let _ = writeln!(out, "\t# line {}", assertion.span.line);
    }
    write_commands(out, &assertion.setup_commands, 1);

    // Arrow assertions evaluate their left-hand side as a command too.
    out.push_str("\tactual=\"$(\n");
    write_commands(out, &assertion.actual, 2);
    out.push_str("\t)\"\n");

    if assertion.expected.is_empty() {
        out.push_str("\texpected=\"\"\n");
    } else {
        let marker = heredoc_marker(&assertion.expected);
        let _ = writeln!(out, "\texpected=\"$(cat <<'{marker}'");
        for line in &assertion.expected {
            out.push_str(line);
            out.push('\n');
        }
        let _ = writeln!(out, "{marker}");
        out.push_str("\t)\"\n");
    }

    let _ = writeln!(
        out,
        "\t[ \"$actual\" {} \"$expected\" ]",
        assertion.kind.operator()
    );
}

fn write_commands(out: &mut String, commands: &[String], indent: usize) {
    let prefix = "\t".repeat(indent);
    for command in commands {
        out.push_str(&prefix);
        out.push_str(command);
        out.push('\n');
    }
}

/// Pick a heredoc terminator that no expected line collides with.
fn heredoc_marker(lines: &[String]) -> String {
    let mut marker = HEREDOC_MARKER.to_string();
    while lines.iter().any(|line| *line == marker) {
        marker.push('_');
    }
    marker
}

fn escape_double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
