//! Minimal field extraction from weather API responses
//!
//! These helpers scan the raw response text for a quoted key and read the
//! value that follows. They do not parse JSON: each looks at the first
//! occurrence of the key only, and a miss is `None`.

use tracing::trace;

const NUMBER_CHARS: &str = " -+.0123456789Ee";
const INTEGER_CHARS: &str = " -+0123456789";

/// Byte offset just past `needle`, if present
fn value_start(json: &str, needle: &str) -> Option<usize> {
    let start = json.find(needle).map(|i| i + needle.len());
    if start.is_none() {
        trace!(needle, "key not found");
    }
    start
}

/// Longest prefix of `json[start..]` made only of `allowed` characters
fn scan<'a>(json: &'a str, start: usize, allowed: &str) -> &'a str {
    let rest = &json[start..];
    let end = rest
        .char_indices()
        .find(|(_, c)| !allowed.contains(*c))
        .map_or(rest.len(), |(i, _)| i);
    rest[..end].trim()
}

/// Reads the number after `"key":`
#[must_use]
pub fn find_number(json: &str, key: &str) -> Option<f64> {
    let start = value_start(json, &format!("\"{key}\":"))?;
    scan(json, start, NUMBER_CHARS).parse().ok()
}

/// Reads the integer after `"key":`
#[must_use]
pub fn find_integer(json: &str, key: &str) -> Option<i64> {
    let start = value_start(json, &format!("\"{key}\":"))?;
    scan(json, start, INTEGER_CHARS).parse().ok()
}

/// Reads the string after `"key":"` up to the next quote.
///
/// Escapes are not interpreted.
#[must_use]
pub fn find_string<'a>(json: &'a str, key: &str) -> Option<&'a str> {
    let start = value_start(json, &format!("\"{key}\":\""))?;
    let len = json[start..].find('"')?;
    Some(&json[start..start + len])
}

/// Reads the first element of the array after `"key":[`
#[must_use]
pub fn first_array_number(json: &str, key: &str) -> Option<f64> {
    let start = value_start(json, &format!("\"{key}\":["))?;
    scan(json, start, NUMBER_CHARS).parse().ok()
}

/// Returns the balanced `{...}` object that follows `"name"`.
///
/// An unterminated object yields the remainder of the input.
#[must_use]
pub fn section<'a>(json: &'a str, name: &str) -> Option<&'a str> {
    let key_at = json.find(&format!("\"{name}\""))?;
    let open = key_at + json[key_at..].find('{')?;

    let mut depth = 0usize;
    for (i, c) in json[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&json[open..=open + i]);
                }
            }
            _ => {}
        }
    }
    Some(&json[open..])
}
