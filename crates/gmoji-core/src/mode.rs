/// The active transcoding scheme for a chat.
///
/// Exactly two schemes exist. Anything else found in storage selects the
/// identity transform at dispatch time instead of an error (see
/// [`crate::cipher::CipherEngine`]), so this enum stays strict: it only
/// ever holds a valid mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Emoji substitution over the 26 Latin letters + space.
    Emoji,
    /// `\uXXXX` code-point escapes over the full character range.
    Unicode,
}

impl Mode {
    /// Mode newly seen chats start in.
    pub const DEFAULT: Mode = Mode::Emoji;

    /// The stored / user-facing label.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Emoji => "emoji",
            Mode::Unicode => "unicode",
        }
    }

    /// Strict parse of a stored or user-supplied label. Unknown labels are
    /// `None`; callers decide between rejecting (`/changemod` with an
    /// explicit argument) and degrading to identity (dispatch).
    pub fn parse(label: &str) -> Option<Mode> {
        match label {
            "emoji" => Some(Mode::Emoji),
            "unicode" => Some(Mode::Unicode),
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Emoji => Mode::Unicode,
            Mode::Unicode => Mode::Emoji,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        assert_eq!(Mode::parse("emoji"), Some(Mode::Emoji));
        assert_eq!(Mode::parse("unicode"), Some(Mode::Unicode));
        assert_eq!(Mode::parse(Mode::Emoji.as_str()), Some(Mode::Emoji));
        assert_eq!(Mode::parse(Mode::Unicode.as_str()), Some(Mode::Unicode));
    }

    #[test]
    fn unknown_labels_do_not_parse() {
        assert_eq!(Mode::parse(""), None);
        assert_eq!(Mode::parse("EMOJI"), None);
        assert_eq!(Mode::parse("rot13"), None);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Mode::Emoji.toggled(), Mode::Unicode);
        assert_eq!(Mode::Unicode.toggled(), Mode::Emoji);
        assert_eq!(Mode::Emoji.toggled().toggled(), Mode::Emoji);
    }
}
