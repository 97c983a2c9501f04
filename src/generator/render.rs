//! Rendering of the description table into `data.rs`.
//!
//! The output is a `phf_map!` literal. Before anything is written the
//! rendered text is re-lexed: every string literal must be well formed and
//! the decoded literals must reproduce the table exactly.

use std::fmt::Write;
use std::iter::Peekable;
use std::str::CharIndices;
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::RenderError;
use super::extract::DescriptionTable;

/// Tool name recorded in the generated header.
pub const GENERATOR_NAME: &str = "mimedesc-gen";

/// Name of the static emitted into `data.rs`; `lib.rs` refers to it.
pub const TABLE_NAME: &str = "MIME_DESCRIPTIONS";

/// Escape a string for use inside a double-quoted Rust literal.
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full `data.rs` source for `table`.
pub fn render_table(
    table: &DescriptionTable,
    generated_at: SystemTime,
) -> Result<String, RenderError> {
    let mut out = String::with_capacity(512 + table.len() * 64);

    writeln!(out, "// Code generated by {GENERATOR_NAME}; DO NOT EDIT.")?;
    writeln!(
        out,
        "// This file was generated on {}",
        format_rfc3339(generated_at)
    )?;
    writeln!(out)?;
    writeln!(out, "/// MIME types mapped to their human-friendly descriptions.")?;
    writeln!(out, "/// Sourced from the freedesktop.org shared-mime-info database.")?;
    writeln!(
        out,
        "pub(crate) static {TABLE_NAME}: phf::Map<&'static str, &'static str> = ::phf::phf_map! {{"
    )?;
    for (mime_type, description) in table {
        writeln!(
            out,
            "    \"{}\" => \"{}\",",
            escape_literal(mime_type),
            escape_literal(description)
        )?;
    }
    writeln!(out, "}};")?;

    let literals = check_source(&out)?;
    verify_round_trip(table, &literals)?;
    Ok(out)
}

fn verify_round_trip(table: &DescriptionTable, literals: &[String]) -> Result<(), RenderError> {
    if literals.len() != table.len() * 2 {
        return Err(RenderError::Mismatch(format!(
            "expected {} string literals, found {}",
            table.len() * 2,
            literals.len()
        )));
    }
    for ((mime_type, description), pair) in table.iter().zip(literals.chunks(2)) {
        if pair[0] != *mime_type || pair[1] != *description {
            return Err(RenderError::Mismatch(format!(
                "entry for {mime_type:?} decodes as {:?} => {:?}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

/// Lexically check Rust source text and return its decoded string literals.
///
/// Covers what the generator can emit: line and block comments, string,
/// char and lifetime tokens, and bracket nesting. Raw strings are not
/// recognised.
pub fn check_source(src: &str) -> Result<Vec<String>, RenderError> {
    let mut literals = Vec::new();
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '/' if next_is(&mut chars, '/') => {
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if next_is(&mut chars, '*') => {
                chars.next();
                skip_block_comment(&mut chars, offset)?;
            }
            '"' => literals.push(read_string(&mut chars, offset)?),
            '\'' => skip_char_or_lifetime(&mut chars, offset)?,
            '(' | '[' | '{' => open.push((ch, offset)),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match open.pop() {
                    Some((opener, _)) if opener == expected => {}
                    _ => return Err(RenderError::Unbalanced { offset, delimiter: ch }),
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some((delimiter, offset)) => Err(RenderError::Unbalanced { offset, delimiter }),
        None => Ok(literals),
    }
}

type Chars<'a> = Peekable<CharIndices<'a>>;

fn next_is(chars: &mut Chars<'_>, expected: char) -> bool {
    matches!(chars.peek(), Some(&(_, c)) if c == expected)
}

fn skip_block_comment(chars: &mut Chars<'_>, start: usize) -> Result<(), RenderError> {
    let mut depth = 1usize;
    while let Some((_, c)) = chars.next() {
        match c {
            '*' if next_is(chars, '/') => {
                chars.next();
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            '/' if next_is(chars, '*') => {
                chars.next();
                depth += 1;
            }
            _ => {}
        }
    }
    Err(RenderError::Unbalanced {
        offset: start,
        delimiter: '/',
    })
}

/// Decode a string literal whose opening quote was just consumed.
fn read_string(chars: &mut Chars<'_>, start: usize) -> Result<String, RenderError> {
    let mut value = String::new();
    loop {
        let (offset, ch) = chars
            .next()
            .ok_or(RenderError::UnterminatedLiteral { offset: start })?;
        match ch {
            '"' => return Ok(value),
            '\r' => return Err(RenderError::BareCarriageReturn { offset }),
            '\\' => {
                let (_, escape) = chars
                    .next()
                    .ok_or(RenderError::UnterminatedLiteral { offset: start })?;
                match escape {
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    '0' => value.push('\0'),
                    '\\' | '"' | '\'' => value.push(escape),
                    // Line continuation: the newline and leading whitespace are dropped.
                    '\n' => {
                        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
                            chars.next();
                        }
                    }
                    'x' => value.push(read_byte_escape(chars, offset)?),
                    'u' => value.push(read_unicode_escape(chars, offset)?),
                    other => return Err(RenderError::InvalidEscape { offset, escape: other }),
                }
            }
            c => value.push(c),
        }
    }
}

fn read_byte_escape(chars: &mut Chars<'_>, offset: usize) -> Result<char, RenderError> {
    let invalid = || RenderError::InvalidEscape { offset, escape: 'x' };
    let mut value = 0u32;
    for _ in 0..2 {
        let digit = chars
            .next()
            .and_then(|(_, c)| c.to_digit(16))
            .ok_or_else(invalid)?;
        value = value * 16 + digit;
    }
    if value > 0x7f {
        return Err(invalid());
    }
    char::from_u32(value).ok_or_else(invalid)
}

fn read_unicode_escape(chars: &mut Chars<'_>, offset: usize) -> Result<char, RenderError> {
    let invalid = || RenderError::InvalidEscape { offset, escape: 'u' };
    if !matches!(chars.next(), Some((_, '{'))) {
        return Err(invalid());
    }
    let mut value = 0u32;
    let mut digits = 0;
    loop {
        match chars.next() {
            Some((_, '}')) if digits > 0 => break,
            Some((_, c)) if digits < 6 => {
                value = value * 16 + c.to_digit(16).ok_or_else(invalid)?;
                digits += 1;
            }
            _ => return Err(invalid()),
        }
    }
    char::from_u32(value).ok_or_else(invalid)
}

/// Skip a char literal (`'a'`, `'\n'`) or a lifetime (`'static`) after its
/// leading quote.
fn skip_char_or_lifetime(chars: &mut Chars<'_>, start: usize) -> Result<(), RenderError> {
    match chars.next() {
        Some((_, '\\')) => {
            chars.next();
            for (_, c) in chars.by_ref() {
                if c == '\'' {
                    return Ok(());
                }
            }
            Err(RenderError::UnterminatedLiteral { offset: start })
        }
        Some(_) => {
            if next_is(chars, '\'') {
                chars.next();
            }
            Ok(())
        }
        None => Err(RenderError::UnterminatedLiteral { offset: start }),
    }
}

/// Format as RFC 3339 in UTC with second precision, e.g. `2026-10-19T08:30:00Z`.
pub fn format_rfc3339(time: SystemTime) -> String {
    let secs = time.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let rem = secs % 86_400;
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
        rem / 3600,
        rem % 3600 / 60,
        rem % 60
    )
}

// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
