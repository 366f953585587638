//! Null-tolerant string helpers.
//!
//! String inputs are `impl Into<Option<&str>>`, so callers may pass either a
//! plain `&str` or `None`. A string is *blank* when it is absent or has zero
//! length; whitespace is content. Character counts are Unicode scalar
//! values, so a count never splits a code point.

use crate::core::contract::{require, require_non_null};
use crate::core::sequence::sequence;
use crate::utils::error::Result;
use serde_json::Value;

/// Returns whether `string` is present and has at least one character.
pub fn non_blank<'a>(string: impl Into<Option<&'a str>>) -> bool {
    string.into().is_some_and(|s| !s.is_empty())
}

/// Returns whether `string` is absent or empty.
pub fn is_blank<'a>(string: impl Into<Option<&'a str>>) -> bool {
    string.into().map_or(true, str::is_empty)
}

/// Concatenates `string` with itself `count` times.
pub fn generate<'a>(string: impl Into<Option<&'a str>>, count: usize) -> Result<String> {
    let string = require_non_null(string.into(), "string is null", &[])?;
    repeat(string, count, "")
}

/// Concatenates `string` `count` times with `delimiter` between repetitions.
pub fn generate_delimited<'a, 'b>(
    string: impl Into<Option<&'a str>>,
    count: usize,
    delimiter: impl Into<Option<&'b str>>,
) -> Result<String> {
    let string = require_non_null(string.into(), "string is null", &[])?;
    let delimiter = require_non_null(delimiter.into(), "delimiter is null", &[])?;
    repeat(string, count, delimiter)
}

// The whole output is sized and reserved before anything is copied.
fn repeat(string: &str, count: usize, delimiter: &str) -> Result<String> {
    let len = string.len().checked_mul(count).and_then(|units| {
        units.checked_add(delimiter.len().checked_mul(count.saturating_sub(1))?)
    });

    let mut generated = String::new();
    let reserved = len.is_some_and(|len| generated.try_reserve_exact(len).is_ok());
    require(|| reserved, "count {} is too large", &[&count])?;
    if len == Some(0) {
        return Ok(generated);
    }

    for t in 0..count {
        if t != 0 {
            generated.push_str(delimiter);
        }
        generated.push_str(string);
    }

    Ok(generated)
}

/// Encloses `string` in double quotes. An absent string stays absent.
pub fn quote<'a>(string: impl Into<Option<&'a str>>) -> Option<String> {
    string.into().map(|s| format!("\"{}\"", s))
}

/// Quotes `value` if it is a JSON string, otherwise returns it unchanged.
pub fn quote_if_string(value: Value) -> Value {
    match value {
        Value::String(s) => quote(s.as_str()).map_or(Value::String(s), Value::String),
        other => other,
    }
}

/// Quotes every string of `strings`, preserving order.
pub fn quote_all<I, S>(strings: Option<I>) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sequence(strings)
        .filter_map(|s| quote(s.as_ref()))
        .collect()
}

/// Removes the first `count` characters. Blank input is returned as is and
/// a `count` past the end yields an empty string.
pub fn strip_head<'a>(string: impl Into<Option<&'a str>>, count: usize) -> Option<&'a str> {
    let string = string.into()?;
    if string.is_empty() {
        return Some(string);
    }

    let offset = string
        .char_indices()
        .nth(count)
        .map_or(string.len(), |(offset, _)| offset);
    Some(&string[offset..])
}

/// Removes the last `count` characters. Blank input is returned as is and
/// a `count` past the start yields an empty string.
pub fn strip_tail<'a>(string: impl Into<Option<&'a str>>, count: usize) -> Option<&'a str> {
    let string = string.into()?;
    if string.is_empty() {
        return Some(string);
    }

    let keep = string.chars().count().saturating_sub(count);
    let offset = string
        .char_indices()
        .nth(keep)
        .map_or(string.len(), |(offset, _)| offset);
    Some(&string[..offset])
}

fn convert_first<I>(string: Option<&str>, convert: impl FnOnce(char) -> I) -> Option<String>
where
    I: Iterator<Item = char>,
{
    let string = string?;
    let mut chars = string.chars();
    match chars.next() {
        Some(first) => Some(convert(first).chain(chars).collect()),
        None => Some(String::new()),
    }
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// The first character is a full Unicode scalar value; its upper-case form
/// may expand to several characters (`ß` becomes `SS`).
pub fn capitalize<'a>(string: impl Into<Option<&'a str>>) -> Option<String> {
    convert_first(string.into(), char::to_uppercase)
}

/// Lower-cases the first character, leaving the rest untouched.
pub fn uncapitalize<'a>(string: impl Into<Option<&'a str>>) -> Option<String> {
    convert_first(string.into(), char::to_lowercase)
}
