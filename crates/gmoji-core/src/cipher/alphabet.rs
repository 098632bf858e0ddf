use std::collections::HashMap;

/// Bidirectional mapping between plain characters and substitution tokens.
///
/// The forward direction is a plain lookup. The reverse index and the
/// maximum token length, measured in chars since several tokens span more
/// than one codepoint, are derived once at construction and drive the
/// greedy decoder. Read-only after construction.
pub struct Alphabet {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
    max_token_chars: usize,
}

impl Alphabet {
    /// Build from character/token pairs. The chart must be a bijection
    /// with non-empty tokens; `chart_is_bijective` checks this in tests.
    pub fn new(pairs: &[(char, &'static str)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut reverse = HashMap::with_capacity(pairs.len());
        let mut max_token_chars = 1;

        for &(ch, token) in pairs {
            forward.insert(ch, token);
            reverse.insert(token, ch);
            max_token_chars = max_token_chars.max(token.chars().count());
        }

        Self {
            forward,
            reverse,
            max_token_chars,
        }
    }

    /// Token for a character, folding ASCII uppercase onto the chart's
    /// lowercase domain.
    pub fn lookup(&self, ch: char) -> Option<&'static str> {
        self.forward
            .get(&ch)
            .or_else(|| self.forward.get(&ch.to_ascii_lowercase()))
            .copied()
    }

    /// Character for an exact token.
    pub fn reverse_lookup(&self, token: &str) -> Option<char> {
        self.reverse.get(token).copied()
    }

    /// Longest token length, in chars.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }
}

/// The fixed emoji chart: the 26 Latin letters plus space.
///
/// Two tokens (`j` and `u`) carry a VS16 variation selector and therefore
/// span two codepoints, written with an explicit escape so the invisible
/// selector cannot get lost in editing. The decoder must never assume one
/// codepoint per token.
pub fn emoji_chart() -> Alphabet {
    Alphabet::new(&[
        ('a', "😀"),
        ('b', "🍒"),
        ('c', "🍌"),
        ('d', "🍩"),
        ('e', "🥚"),
        ('f', "🐟"),
        ('g', "🦍"),
        ('h', "🏡"),
        ('i', "🍦"),
        ('j', "🕹\u{fe0f}"),
        ('k', "🔑"),
        ('l', "🍋"),
        ('m', "🌝"),
        ('n', "🎶"),
        ('o', "🍊"),
        ('p', "🥞"),
        ('q', "❓"),
        ('r', "🌈"),
        ('s', "⭐"),
        ('t', "🌴"),
        ('u', "☂\u{fe0f}"),
        ('v', "🌋"),
        ('w', "🌊"),
        ('x', "❌"),
        ('y', "🐸"),
        ('z', "⚡"),
        (' ', "⬜"),
    ])
}
