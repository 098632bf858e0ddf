//! Escape-scheme transcoder: `\uXXXX` code-point escapes.
//!
//! Unlike the emoji scheme this is a codec, not a chart lookup: it covers
//! the full code-point range, not just the letters the chart maps.

/// Escape marker prefix.
const MARKER: &str = "\\u";

/// Encode every character as the marker plus its code point in lowercase
/// hex, zero-padded to four digits (astral-plane characters take five or
/// six), joined with single spaces. Empty in, empty out.
pub fn encode(text: &str) -> String {
    let parts: Vec<String> = text
        .chars()
        .map(|ch| format!("{MARKER}{:04x}", ch as u32))
        .collect();
    parts.join(" ")
}

/// Decode a stream of whitespace-separated tokens.
///
/// Marker-prefixed tokens parse as hex code points; tokens that fail to
/// parse (bad hex, surrogate or out-of-range value) or carry no marker pass
/// through unchanged. Whitespace between tokens is structural and dropped:
/// encoded streams round-trip exactly, because every character including a
/// space was escaped on the way in. Free-form text mixed into the stream
/// keeps only its whitespace-delimited tokens.
pub fn decode(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len() / 4);
    for token in escaped.split_whitespace() {
        match parse_escape(token) {
            Some(ch) => out.push(ch),
            None => out.push_str(token),
        }
    }
    out
}

fn parse_escape(token: &str) -> Option<char> {
    let hex = token.strip_prefix(MARKER)?;
    let code = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code)
}
