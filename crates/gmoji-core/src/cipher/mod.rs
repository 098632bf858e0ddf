//! Bidirectional text transcoding between plain text and the two cipher
//! schemes, plus the per-mode dispatcher.

pub mod alphabet;
pub mod emoji;
pub mod unicode;

use alphabet::Alphabet;

use crate::mode::Mode;

/// The transcoding engine: owns the emoji chart and routes per mode.
///
/// Pure and stateless per call; safe to share across tasks without
/// synchronization.
pub struct CipherEngine {
    emoji: Alphabet,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self {
            emoji: alphabet::emoji_chart(),
        }
    }

    /// Encode under a stored mode label.
    ///
    /// Labels that are not a known mode select the identity transform, so
    /// corrupted or legacy stored values degrade to pass-through instead of
    /// breaking message delivery.
    pub fn encode(&self, text: &str, mode: &str) -> String {
        match Mode::parse(mode) {
            Some(Mode::Emoji) => emoji::encode(&self.emoji, text),
            Some(Mode::Unicode) => unicode::encode(text),
            None => text.to_string(),
        }
    }

    /// Decode under a stored mode label; unknown labels are identity.
    pub fn decode(&self, text: &str, mode: &str) -> String {
        match Mode::parse(mode) {
            Some(Mode::Emoji) => emoji::decode(&self.emoji, text),
            Some(Mode::Unicode) => unicode::decode(text),
            None => text.to_string(),
        }
    }
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_emoji_mode_to_the_chart() {
        let engine = CipherEngine::new();
        let glyphs = engine.encode("cab", "emoji");
        assert_eq!(glyphs, "🍌😀🍒");
        assert_eq!(engine.decode(&glyphs, "emoji"), "cab");
    }

    #[test]
    fn routes_unicode_mode_to_the_escape_codec() {
        let engine = CipherEngine::new();
        let escaped = engine.encode("Hi", "unicode");
        assert_eq!(engine.decode(&escaped, "unicode"), "Hi");
        assert!(escaped.split_whitespace().count() == 2);
    }

    #[test]
    fn unknown_mode_labels_select_identity_for_both_operations() {
        let engine = CipherEngine::new();
        for label in ["", "bogus", "EMOJI", "rot13"] {
            assert_eq!(engine.encode("cab", label), "cab");
            assert_eq!(engine.decode("🍌😀🍒", label), "🍌😀🍒");
        }
    }
}
