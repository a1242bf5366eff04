//! CLI tool to transpile and check Batspp test files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use batspp_rs::{Error, GenerateOptions};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "batspp")]
#[command(version)]
#[command(about = "Transpile Batspp test descriptions into Bats scripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a Bats script from a Batspp source
    Transpile {
        /// Batspp source file
        source: PathBuf,

        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not run tests inside temporary directories
        #[arg(long)]
        no_sandbox: bool,

        /// Directory under which test sandboxes are created
        #[arg(long, default_value = "/tmp")]
        temp_root: String,

        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Check that Batspp sources parse
    Check {
        /// Batspp source files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        mode: ModeArgs,
    },
}

#[derive(Args, Debug)]
struct ModeArgs {
    /// Read tests from the comments of a shell script
    #[arg(long, conflicts_with = "standalone")]
    embedded: bool,

    /// Read the whole file as Batspp
    #[arg(long)]
    standalone: bool,
}

impl ModeArgs {
    /// Explicit flags win; otherwise only `.batspp` files are standalone.
    fn embedded_for(&self, path: &Path) -> bool {
        if self.embedded {
            true
        } else if self.standalone {
            false
        } else {
            path.extension().is_none_or(|ext| ext != "batspp")
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Transpile {
            source,
            output,
            no_sandbox,
            temp_root,
            mode,
        } => {
            let embedded = mode.embedded_for(&source);
            let mut options = GenerateOptions::default()
                .source(&source.display().to_string())
                .sandbox(!no_sandbox)
                .temp_root(&temp_root);
            // Tests embedded in a script call its functions, so the
            // generated suite sources it by absolute path.
            if embedded {
                match fs::canonicalize(&source) {
                    Ok(path) => {
                        debug!(path = %path.display(), "sourcing embedded script");
                        options = options.source_script(&path.display().to_string());
                    }
                    Err(e) => {
                        eprintln!("{}: {e}", source.display());
                        return ExitCode::FAILURE;
                    }
                }
            }
            transpile(&source, output.as_deref(), embedded, &options)
        }
        Command::Check { files, mode } => {
            let mut had_error = false;
            for path in &files {
                if !check(path, mode.embedded_for(path)) {
                    had_error = true;
                }
            }
            if had_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn transpile(
    source: &Path,
    output: Option<&Path>,
    embedded: bool,
    options: &GenerateOptions,
) -> ExitCode {
    let Some(content) = read(source) else {
        return ExitCode::FAILURE;
    };

    debug!(path = %source.display(), embedded, "transpiling");
    let script = match batspp_rs::transpile(&content, embedded, options) {
        Ok(script) => script,
        Err(e) => {
            report(source, &e);
            return ExitCode::FAILURE;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, script) {
                eprintln!("{}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            debug!(path = %path.display(), "wrote bats script");
        }
        None => print!("{script}"),
    }

    ExitCode::SUCCESS
}

fn check(path: &Path, embedded: bool) -> bool {
    let Some(content) = read(path) else {
        return false;
    };

    match batspp_rs::parse_str(&content, embedded) {
        Ok(suite) => {
            eprintln!(
                "{}: valid ({} test(s), {} assertion(s), \
                 {} setup command(s), {} teardown command(s))",
                path.display(),
                suite.tests.len(),
                suite.assertion_count(),
                suite.setup_commands.len(),
                suite.teardown_commands.len()
            );
            true
        }
        Err(e) => {
            report(path, &e);
            false
        }
    }
}

fn read(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "read source");
            Some(content)
        }
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            None
        }
    }
}

fn report(path: &Path, error: &Error) {
    eprintln!("{}: {error}", path.display());
    let line = error.source_line();
    if !line.is_empty() {
        eprintln!("{:>5} | {line}", error.span().line);
    }
}
