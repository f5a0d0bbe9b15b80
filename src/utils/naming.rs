//! Name normalization for generated source.
//!
//! Two deliberately different rules live here:
//!
//! - [`sanitize`] produces file/package/variable identifiers. Only spaces
//!   become underscores; hyphens and other punctuation are deleted.
//! - [`title_case`] produces exported Go name fragments. Hyphens, underscores
//!   and whitespace all split words.
//!
//! So "To-Do List" becomes `todo_list` on disk but `ToDoList` in code.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a letter (`L*`), a decimal digit (`Nd`) or `_`.
/// Wider classes like `½`, `²` or `Ⅻ` are not valid in Go identifiers.
static NON_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}_]").expect("valid regex"));

/// Returned by [`sanitize`] when nothing survives filtering.
pub const FALLBACK_IDENTIFIER: &str = "mydashboard";

/// Lowercase, underscore-delimited identifier. Never empty.
pub fn sanitize(text: &str) -> String {
    let spaced = text.to_lowercase().replace(' ', "_");
    let out = NON_IDENTIFIER.replace_all(&spaced, "").into_owned();

    if out.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }

    out
}

/// UpperCamelCase fragment. Empty when the input has no words.
///
/// Only the first character of each word is touched, so internal capitals
/// survive ("iOS apps" -> "IOSApps").
pub fn title_case(text: &str) -> String {
    text.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect()
}

/// Upper-case the first letter of every word, where a word starts after any
/// separator (space or ASCII punctuation other than `_`).
///
/// Used for human-facing labels: "to-do list" -> "To-Do List".
pub fn label_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = ' ';

    for ch in text.chars() {
        if is_word_separator(prev) {
            out.push(upper(ch));
        } else {
            out.push(ch);
        }
        prev = ch;
    }

    out
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        return !(ch.is_ascii_alphanumeric() || ch == '_');
    }
    if ch.is_alphanumeric() {
        return false;
    }
    ch.is_whitespace()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(upper(first));
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Single-character upper case. Characters whose upper case expands to
/// several characters (`ß` -> `SS`) are left alone.
fn upper(ch: char) -> char {
    let mut mapped = ch.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
