//! Symbol-scheme transcoder: direct lookup on encode, greedy longest-match
//! tokenization on decode.

use super::alphabet::Alphabet;

/// Replace every mapped character with its token. Characters without a
/// mapping (digits, punctuation, non-Latin text) are kept as-is.
pub fn encode(chart: &Alphabet, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for ch in text.chars() {
        match chart.lookup(ch) {
            Some(token) => out.push_str(token),
            None => out.push(ch),
        }
    }
    out
}

/// Scan left to right, always taking the longest known token that is a
/// prefix of the remaining input.
///
/// Tokens vary in codepoint length and a short token may be a proper prefix
/// of a longer one, so candidate lengths are tried from the longest down
/// to one char; a position with no match at any length emits its character
/// unchanged. Never fails: unknown input degrades to pass-through.
pub fn decode(chart: &Alphabet, glyphs: &str) -> String {
    let mut out = String::with_capacity(glyphs.len());
    let mut rest = glyphs;

    'scan: while let Some(first) = rest.chars().next() {
        for len in (1..=chart.max_token_chars()).rev() {
            let Some(candidate) = prefix_of_chars(rest, len) else {
                continue;
            };
            if let Some(ch) = chart.reverse_lookup(candidate) {
                out.push(ch);
                rest = &rest[candidate.len()..];
                continue 'scan;
            }
        }
        out.push(first);
        rest = &rest[first.len_utf8()..];
    }

    out
}

/// The prefix of `s` spanning exactly `n` chars, or `None` when `s` is
/// shorter than that.
fn prefix_of_chars(s: &str, n: usize) -> Option<&str> {
    let mut count = 0;
    for (i, ch) in s.char_indices() {
        count += 1;
        if count == n {
            return Some(&s[..i + ch.len_utf8()]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::alphabet::{emoji_chart, Alphabet};
    use super::*;

    #[test]
    fn encodes_in_input_order() {
        let chart = emoji_chart();
        assert_eq!(encode(&chart, "cab"), "🍌😀🍒");
    }

    #[test]
    fn encode_folds_case_and_passes_unmapped_through() {
        let chart = emoji_chart();
        assert_eq!(encode(&chart, "Hi!"), "🏡🍦!");
    }

    #[test]
    fn decode_inverts_encode_to_lowercase() {
        let chart = emoji_chart();
        for input in ["cab", "Hello World", "The quick brown fox", "jukebox up"] {
            assert_eq!(decode(&chart, &encode(&chart, input)), input.to_lowercase());
        }
    }

    #[test]
    fn decode_handles_multi_codepoint_tokens() {
        let chart = emoji_chart();
        // `j` and `u` tokens carry a VS16 selector (two codepoints each).
        let glyphs = encode(&chart, "ju");
        assert_eq!(glyphs.chars().count(), 4);
        assert_eq!(decode(&chart, &glyphs), "ju");
    }

    #[test]
    fn out_of_domain_text_is_stable_under_both_operations() {
        let chart = emoji_chart();
        for input in ["", "1234!?", "привет", "¿qué?"] {
            assert_eq!(encode(&chart, input), input);
            assert_eq!(decode(&chart, input), input);
        }
    }

    #[test]
    fn decode_is_idempotent_on_token_free_text() {
        let chart = emoji_chart();
        let input = "no-tokens_here.123";
        assert_eq!(decode(&chart, &decode(&chart, input)), decode(&chart, input));
    }

    #[test]
    fn longest_match_wins_over_a_proper_prefix() {
        // One token is a proper prefix of the other; short-first matching
        // would split the selector off and corrupt the decode.
        let chart = Alphabet::new(&[('a', "⭐"), ('b', "⭐\u{fe0f}")]);
        assert_eq!(decode(&chart, "⭐\u{fe0f}"), "b");
        assert_eq!(decode(&chart, "⭐"), "a");
        assert_eq!(decode(&chart, "⭐⭐\u{fe0f}⭐"), "aba");
    }

    #[test]
    fn unmatched_glyphs_pass_through_mid_stream() {
        let chart = emoji_chart();
        assert_eq!(decode(&chart, "🍌-😀"), "c-a");
    }
}
