//! Typewriter Effect
//!
//! Typed/deleted text loop for the hero headline.

/// Delay after revealing a character
pub const TYPE_DELAY_MS: u32 = 100;
/// Pause with the full text shown
pub const HOLD_DELAY_MS: u32 = 2000;
/// Delay after removing a character
pub const DELETE_DELAY_MS: u32 = 50;
/// Pause on empty text before the next phrase
pub const NEXT_DELAY_MS: u32 = 500;

/// Text to display and how long to wait before the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    /// Characters currently shown (or about to be, while typing)
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            text_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    fn current(&self) -> &str {
        self.texts.get(self.text_index).map(String::as_str).unwrap_or("")
    }

    fn prefix(&self, chars: usize) -> String {
        self.current().chars().take(chars).collect()
    }

    /// Advance one step
    pub fn tick(&mut self) -> Frame {
        if self.texts.is_empty() {
            return Frame { text: String::new(), delay_ms: HOLD_DELAY_MS };
        }

        let len = self.current().chars().count();
        if !self.deleting {
            if self.char_index <= len {
                let text = self.prefix(self.char_index);
                self.char_index += 1;
                Frame { text, delay_ms: TYPE_DELAY_MS }
            } else {
                // Fully typed: hold, then delete on the next tick
                self.deleting = true;
                self.char_index = len;
                Frame { text: self.prefix(len), delay_ms: HOLD_DELAY_MS }
            }
        } else if self.char_index > 0 {
            self.char_index -= 1;
            Frame { text: self.prefix(self.char_index), delay_ms: DELETE_DELAY_MS }
        } else {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            Frame { text: String::new(), delay_ms: NEXT_DELAY_MS }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tw: &mut Typewriter, ticks: usize) -> Vec<Frame> {
        (0..ticks).map(|_| tw.tick()).collect()
    }

    #[test]
    fn test_types_holds_deletes() {
        let mut tw = Typewriter::new(["Dev"]);
        let frames = run(&mut tw, 10);
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        let delays: Vec<u32> = frames.iter().map(|f| f.delay_ms).collect();

        assert_eq!(texts, vec!["", "D", "De", "Dev", "Dev", "De", "D", "", "", ""]);
        assert_eq!(delays, vec![
            TYPE_DELAY_MS, TYPE_DELAY_MS, TYPE_DELAY_MS, TYPE_DELAY_MS,
            HOLD_DELAY_MS,
            DELETE_DELAY_MS, DELETE_DELAY_MS, DELETE_DELAY_MS,
            NEXT_DELAY_MS,
            TYPE_DELAY_MS,
        ]);
    }

    #[test]
    fn test_advances_and_wraps() {
        let mut tw = Typewriter::new(["Ab", "Cd"]);
        // "Ab": 3 typing + 1 hold + 2 deleting + 1 next
        run(&mut tw, 7);
        let frames = run(&mut tw, 3);
        assert_eq!(frames[2].text, "Cd");

        run(&mut tw, 4);
        let frames = run(&mut tw, 2);
        assert_eq!(frames[1].text, "A");
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new(["héé"]);
        let texts: Vec<String> = run(&mut tw, 4).into_iter().map(|f| f.text).collect();
        assert_eq!(texts, vec!["", "h", "hé", "héé"]);
    }

    #[test]
    fn test_no_texts() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.tick().text, "");
    }
}
