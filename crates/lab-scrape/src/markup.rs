//! Escapes stray `<`, `>` and `&` in text before tree-sitter sees the page.
//!
//! The grammar's `text` token stops at any of these characters, so cell text
//! such as `<20 copies/mL` or `Ct > 40` would otherwise be split or swallowed
//! by error recovery. A `<` only opens markup when followed by a letter, by
//! `/` and a letter, or by `!` or `?`; every other occurrence is text and is
//! rewritten as a character reference. Tags, comments and `script`/`style`
//! bodies are copied unchanged.

use std::borrow::Cow;

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

pub(crate) fn escape_stray_markup(source: &str) -> Cow<'_, str> {
    if !source.contains(['<', '>', '&']) {
        return Cow::Borrowed(source);
    }

    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len() + 16);
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => {
                if let Some(end) = markup_end(source, i) {
                    out.push_str(&source[i..end]);
                    i = end;
                } else {
                    out.push_str("&lt;");
                    i += 1;
                }
            }
            b'>' => {
                out.push_str("&gt;");
                i += 1;
            }
            b'&' if !starts_reference(&bytes[i + 1..]) => {
                out.push_str("&amp;");
                i += 1;
            }
            _ => {
                let step = source[i..].chars().next().map_or(1, char::len_utf8);
                let next = source[i + step..]
                    .find(['<', '>', '&'])
                    .map_or(bytes.len(), |offset| i + step + offset);
                out.push_str(&source[i..next]);
                i = next;
            }
        }
    }
    Cow::Owned(out)
}

/// End (exclusive) of the markup opened by the `<` at `start`, or `None` if
/// that `<` is plain text.
fn markup_end(source: &str, start: usize) -> Option<usize> {
    let rest = &source.as_bytes()[start + 1..];
    match *rest.first()? {
        b'!' | b'?' => Some(declaration_end(source, start)),
        b'/' if rest.get(1).is_some_and(u8::is_ascii_alphabetic) => {
            Some(tag_end(source, start))
        }
        first if first.is_ascii_alphabetic() => {
            let end = tag_end(source, start);
            let tag = &source[start + 1..end];
            let name = tag_name(tag);
            let raw = RAW_TEXT_ELEMENTS
                .iter()
                .any(|element| name.eq_ignore_ascii_case(element));
            if raw && !tag.trim_end_matches('>').ends_with('/') {
                Some(raw_text_end(source, end, name))
            } else {
                Some(end)
            }
        }
        _ => None,
    }
}

/// Index just past the `>` closing the tag at `start`, honouring quoted
/// attribute values.
fn tag_end(source: &str, start: usize) -> usize {
    let mut quote = None;
    for (offset, byte) in source.as_bytes()[start + 1..].iter().enumerate() {
        match (quote, *byte) {
            (Some(open), byte) if byte == open => quote = None,
            (None, b'"' | b'\'') => quote = Some(*byte),
            (None, b'>') => return start + 1 + offset + 1,
            _ => {}
        }
    }
    source.len()
}

fn declaration_end(source: &str, start: usize) -> usize {
    let rest = &source[start..];
    if rest.starts_with("<!--") {
        return rest[4..].find("-->").map_or(source.len(), |end| start + 4 + end + 3);
    }
    rest.find('>').map_or(source.len(), |end| start + end + 1)
}

/// Start of the closing tag of a raw text element whose body begins at `from`.
fn raw_text_end(source: &str, from: usize, name: &str) -> usize {
    let closing = format!("</{}", name.to_ascii_lowercase());
    source[from..]
        .to_ascii_lowercase()
        .find(&closing)
        .map_or(source.len(), |offset| from + offset)
}

fn tag_name(tag: &str) -> &str {
    let end = tag
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(tag.len());
    &tag[..end]
}

/// Whether the bytes after a `&` form a reference the grammar accepts.
fn starts_reference(rest: &[u8]) -> bool {
    match rest {
        [b'#', b'x' | b'X', hex, ..] => hex.is_ascii_hexdigit(),
        [b'#', digit, ..] => digit.is_ascii_digit(),
        [first, ..] => first.is_ascii_alphabetic(),
        [] => false,
    }
}
