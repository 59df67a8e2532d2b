//! Character-by-character typing effect for the hero title.

/// Yields successively longer prefixes of a text, one character at a time.
///
/// Prefixes always end on a `char` boundary, so multi-byte characters such
/// as emoji appear whole.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Full text being typed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let ch = self.text[self.shown..].chars().next()?;
        self.shown += ch.len_utf8();
        Some(self.text[..self.shown].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_frame() {
        let frames: Vec<String> = Typewriter::new("Strut").collect();
        assert_eq!(frames, vec!["S", "St", "Str", "Stru", "Strut"]);
    }

    #[test]
    fn empty_title_has_no_frames() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn multibyte_chars_stay_whole() {
        let frames: Vec<String> = Typewriter::new("Hi🎉").collect();
        assert_eq!(frames, vec!["H", "Hi", "Hi🎉"]);
    }
}
