#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;

/// Delay between typed characters, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 100;

/// Cursor over a source string, advanced one character per timer tick.
/// The cursor is a byte offset kept on a character boundary, so multi-byte
/// characters are revealed whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Typewriter {
            text: text.into(),
            cursor: 0,
        }
    }

    /// The characters revealed so far.
    pub fn visible(&self) -> &str {
        &self.text[..self.cursor]
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Reveal the next character. Returns false once the source is
    /// exhausted, after which the visible text never changes again.
    pub fn tick(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }
}

/// Clear the bound text and retype `source` one character per `delay_ms`.
/// Each tick schedules the next, so a started animation runs to exhaustion;
/// calling again starts an independent instance against the same signal.
pub fn start(set_text: WriteSignal<String>, source: &str, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        set_text.set(String::new());
        let machine = Rc::new(RefCell::new(Typewriter::new(source)));
        schedule_tick(set_text, machine, delay_ms);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (set_text, source, delay_ms);
    }
}

#[cfg(feature = "hydrate")]
fn schedule_tick(set_text: WriteSignal<String>, machine: Rc<RefCell<Typewriter>>, delay_ms: u32) {
    use gloo_timers::callback::Timeout;

    Timeout::new(delay_ms, move || {
        let advanced = {
            let mut machine = machine.borrow_mut();
            machine.tick().then(|| machine.visible().to_string())
        };
        if let Some(text) = advanced {
            set_text.set(text);
            schedule_tick(set_text, machine, delay_ms);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_character_per_tick() {
        let mut typewriter = Typewriter::new("Hi");
        assert_eq!(typewriter.visible(), "");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "H");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "Hi");
        assert!(typewriter.is_complete());
    }

    #[test]
    fn test_exhausted_cursor_stops_changing() {
        let mut typewriter = Typewriter::new("Hi");
        while typewriter.tick() {}
        assert!(!typewriter.tick());
        assert!(!typewriter.tick());
        assert_eq!(typewriter.visible(), "Hi");
    }

    #[test]
    fn test_empty_source_is_complete_immediately() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_complete());
        assert!(!typewriter.tick());
        assert_eq!(typewriter.visible(), "");
    }

    #[test]
    fn test_multibyte_characters_reveal_whole() {
        let mut typewriter = Typewriter::new("héllo");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "h");
        assert!(typewriter.tick());
        assert_eq!(typewriter.visible(), "hé");
        while typewriter.tick() {}
        assert_eq!(typewriter.visible(), "héllo");
    }
}
