//! ui::prompts
//!
//! Line-oriented prompts.
//!
//! # Design
//!
//! Prompts read from any `BufRead` and write to any `Write`, so the
//! dispatcher can be driven from a real terminal or from a byte buffer in
//! tests. End of input is reported as [`PromptError::Cancelled`]; callers
//! treat it like the user choosing to exit.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt for one line of text.
///
/// The trailing line ending is removed; other whitespace is kept. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD rather than failing.
pub fn input<R, W>(reader: &mut R, writer: &mut W, message: &str) -> Result<String, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(writer, "{}", message)?;
    writer.flush()?;

    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw)? == 0 {
        return Err(PromptError::Cancelled);
    }

    let mut line = String::from_utf8_lossy(&raw).into_owned();
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Prompt for a line that must not be blank.
///
/// Re-prompts with `retry_message` until something other than whitespace is
/// entered. The result is trimmed.
pub fn required<R, W>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    retry_message: &str,
) -> Result<String, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let line = input(reader, writer, message)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        writeln!(writer, "{}", retry_message)?;
    }
}

/// Prompt for an optional value.
///
/// A blank line yields `None`.
pub fn optional<R, W>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<Option<String>, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let line = input(reader, writer, message)?;
    let trimmed = line.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Prompt for a rating.
///
/// Re-prompts until the input parses as a finite number. The 0 to 10 range
/// shown to the user is advisory and not checked.
pub fn rating<R, W>(reader: &mut R, writer: &mut W, message: &str) -> Result<f64, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let line = input(reader, writer, message)?;
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            _ => writeln!(writer, "Invalid rating! Please enter a number.")?,
        }
    }
}
