//! Text armor primitives: hard line wrap, tag decorate, tag extract,
//! whitespace strip.

use crate::error::Error;
use crate::error::Error::{BeginTagNotFound, EndTagNotFound};

/// Hard-wrap `text`, inserting a newline after every `width` characters.
/// The final chunk is newline-terminated even when shorter than `width`;
/// empty input stays empty. Output length is `len + ceil(len / width)`.
///
/// A zero `width` is a configuration bug, not a runtime condition.
pub fn wrap(text: &str, width: usize) -> String {
    assert!(width > 0, "wrap width must be non-zero");

    let mut out = String::with_capacity(text.len() + text.len() / width + 1);
    let mut col = 0;

    for ch in text.chars() {
        out.push(ch);
        col += 1;
        if col == width {
            out.push('\n');
            col = 0;
        }
    }

    if col > 0 {
        out.push('\n');
    }

    out
}

/// Surround `text` with begin and end tag lines:
/// `begin_tag + "\n" + text + end_tag + "\n"`.
///
/// No validation that `text` is free of the tag strings; the encoding
/// alphabet is assumed disjoint from tag content.
pub fn decorate(text: &str, begin_tag: &str, end_tag: &str) -> String {
    format!("{begin_tag}\n{text}{end_tag}\n")
}

/// Slice of `text` strictly between the first `begin_tag` and the first
/// `end_tag` after it.
///
/// The returned slice keeps the newline that [`decorate`] places after the
/// begin tag; callers strip whitespace before decoding. A missing begin
/// tag, or no end tag after it, is an error rather than a partial result.
pub fn find<'a>(text: &'a str, begin_tag: &str, end_tag: &str) -> Result<&'a str, Error> {
    let start = text
        .find(begin_tag)
        .ok_or_else(|| BeginTagNotFound(begin_tag.to_string()))?
        + begin_tag.len();

    let len = text[start..]
        .find(end_tag)
        .ok_or_else(|| EndTagNotFound(end_tag.to_string()))?;

    Ok(&text[start..start + len])
}

/// Remove every whitespace character, undoing the effect of [`wrap`].
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
