//! Token and diagnostic printing

use std::io::Write;

use clap::ValueEnum;
use liza_error::{DiagnosticRenderer, ErrorCode, Level, SourceFile};
use liza_lexer::{Lexed, Literal, Token};
use serde::Serialize;

use crate::error::Result;

/// How tokens are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Line, kind and payload columns
    #[default]
    Table,
    /// One `KIND:payload` per line
    Plain,
    /// A JSON document with tokens and errors
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    tokens: &'a [Token],
    errors: Vec<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    code: ErrorCode,
    level: Level,
    line: u32,
    column: u32,
    message: String,
}

/// Payload text with control characters escaped
fn payload(value: &Literal) -> String {
    let mut out = String::new();
    for c in value.to_string().chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn write_tokens(out: &mut impl Write, file: &str, lexed: &Lexed, format: Format) -> Result<()> {
    match format {
        Format::Plain => {
            for token in &lexed.tokens {
                writeln!(out, "{}:{}", token.kind, payload(&token.value))?;
            }
        }
        Format::Table => {
            for token in &lexed.tokens {
                let kind_str = format!("{:?}", token.kind);
                writeln!(out, "  {:4}  {:<16}  {}", token.line, kind_str, payload(&token.value))?;
            }
            writeln!(out, "\nTotal: {} tokens", lexed.tokens.len())?;
        }
        Format::Json => {
            let errors = lexed
                .errors
                .iter()
                .map(|e| JsonError {
                    code: e.code(),
                    level: if e.is_warning() {
                        Level::Warning
                    } else {
                        Level::Error
                    },
                    line: e.line(),
                    column: e.column(),
                    message: e.to_string(),
                })
                .collect();
            let report = JsonReport {
                file,
                tokens: &lexed.tokens,
                errors,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_diagnostics(
    out: &mut impl Write,
    source: &SourceFile,
    lexed: &Lexed,
    use_colors: bool,
) -> Result<()> {
    let mut renderer = DiagnosticRenderer::new(source);
    if !use_colors {
        renderer = renderer.without_colors();
    }
    for diagnostic in lexed.diagnostics().iter() {
        writeln!(out, "{}", renderer.render(diagnostic))?;
    }
    Ok(())
}

/// One status line per checked file
pub fn write_summary(out: &mut impl Write, file: &str, lexed: &Lexed) -> Result<()> {
    let errors = lexed.diagnostics().error_count();
    if errors == 0 {
        writeln!(out, "  [ok] {}: {} tokens", file, lexed.tokens.len())?;
    } else {
        writeln!(out, "  [error] {}: {} error(s)", file, errors)?;
    }
    Ok(())
}
