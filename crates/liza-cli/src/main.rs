//! Liza tokenizer CLI

mod error;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use liza_error::SourceFile;
use liza_lexer::Lexer;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};
use crate::output::{write_diagnostics, write_summary, write_tokens, Format};

/// Program lexed by `liza demo`
const DEMO_SOURCE: &str = "func main(){
		string helloworld = \"Hello World\"
		print (helloworld)
	}";

#[derive(Parser)]
#[command(name = "liza")]
#[command(version)]
#[command(about = "Liza language tokenizer", long_about = None)]
struct Cli {
    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows file tokens
    Lex {
        /// Input files ("-" reads standard input)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Checks files for lexical errors without printing tokens
    Check {
        /// Input files ("-" reads standard input)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Tokenizes a built-in sample program
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Reads a file, or standard input for "-"
fn load_source(path: &Path) -> Result<SourceFile> {
    let name = path.display().to_string();
    let read_error = |source| CliError::Read {
        path: name.clone(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(read_error)?;
        text
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    let name = if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        name
    };
    Ok(SourceFile::new(name, text))
}

/// Lexes one source, printing tokens (if asked) and diagnostics.
/// Returns false when lexical errors were found.
fn process(source: &SourceFile, format: Option<Format>, use_colors: bool) -> Result<bool> {
    debug!(file = %source.name, "tokenizing");
    let lexed = Lexer::new(&source.source, source.name.as_str()).tokenize();

    if let Some(format) = format {
        let mut stdout = io::stdout().lock();
        write_tokens(&mut stdout, &source.name, &lexed, format)?;
        stdout.flush()?;
    }

    write_diagnostics(&mut io::stderr().lock(), source, &lexed, use_colors)?;

    if format.is_none() {
        write_summary(&mut io::stdout().lock(), &source.name, &lexed)?;
    }

    Ok(!lexed.has_errors())
}

fn run(cli: Cli) -> Result<bool> {
    let use_colors =
        !cli.no_color && std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();

    let mut clean = true;
    match cli.command {
        Commands::Lex { inputs, format } => {
            for input in &inputs {
                let source = load_source(input)?;
                clean &= process(&source, Some(format), use_colors)?;
            }
        }

        Commands::Check { inputs } => {
            for input in &inputs {
                let source = load_source(input)?;
                clean &= process(&source, None, use_colors)?;
            }
        }

        Commands::Demo { format } => {
            let source = SourceFile::new("<demo>", DEMO_SOURCE);
            clean = process(&source, Some(format), use_colors)?;
        }
    }
    Ok(clean)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use liza_lexer::TokenKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lex_arguments() {
        let cli = Cli::try_parse_from(["liza", "-vv", "lex", "a.lz", "b.lz", "--format", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Lex { inputs, format } => {
                assert_eq!(inputs, vec![PathBuf::from("a.lz"), PathBuf::from("b.lz")]);
                assert_eq!(format, Format::Json);
            }
            _ => panic!("expected lex command"),
        }
    }

    #[test]
    fn test_lex_requires_input() {
        assert!(Cli::try_parse_from(["liza", "lex"]).is_err());
    }

    #[test]
    fn test_demo_source_lexes_cleanly() {
        let lexed = Lexer::new(DEMO_SOURCE, "<demo>").tokenize();
        assert!(lexed.errors.is_empty());
        assert_eq!(
            lexed.tokens.iter().filter(|t| t.kind == TokenKind::NewStatement).count(),
            3
        );
        assert_eq!(lexed.tokens.last().map(|t| t.line), Some(4));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_source(Path::new("/definitely/not/here.lz")).unwrap_err();
        assert!(err.to_string().starts_with("error reading /definitely/not/here.lz: "));
    }
}
