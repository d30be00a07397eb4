//! Line and field splitting shared by the parsers

use std::num::ParseIntError;
use std::str::FromStr;

use super::error::ParseCause;

/// Maximum number of characters of input quoted in an error
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Splits text into lines on `\n`, dropping a trailing `\r` from each.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so
/// callers see exactly the rows the remote utility printed.
pub fn lines(input: &str) -> Vec<&str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Splits a line on runs of whitespace
pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Splits a line on `delimiter` and trims every piece
pub fn split_trimmed(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).map(str::trim).collect()
}

/// Parses an unsigned integer field.
///
/// `str::parse` accepts a leading `+`, which none of the utilities print, so
/// any sign is a layout error.
pub fn unsigned<T>(raw: &str) -> Result<T, ParseCause>
where
    T: FromStr<Err = ParseIntError>,
{
    reject_sign(raw)?;
    Ok(raw.parse()?)
}

/// Parses a non-negative decimal field such as a load average
pub fn decimal(raw: &str) -> Result<f64, ParseCause> {
    reject_sign(raw)?;
    Ok(raw.parse()?)
}

fn reject_sign(raw: &str) -> Result<(), ParseCause> {
    if raw.starts_with(['+', '-']) {
        return Err(ParseCause::Layout(format!("unexpected sign in {raw:?}")));
    }
    Ok(())
}

/// Returns `input` cut to [`EXCERPT_MAX_CHARS`] characters, marking the cut
pub fn excerpt(input: &str) -> String {
    match input.char_indices().nth(EXCERPT_MAX_CHARS) {
        Some((idx, _)) => format!("{}…", &input[..idx]),
        None => input.to_string(),
    }
}
