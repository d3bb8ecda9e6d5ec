use super::constants::{
    DELETE_DELAY_MS, HOLD_EMPTY_MS, HOLD_FULL_MS, TYPE_DELAY_MS, TYPING_DELIMITER,
};

/// Where the typewriter is in its type/hold/delete/hold cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
}

/// One rendered frame: the text to show and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: i32,
}

/// Cycles through phrases forever, one character per tick.
///
/// Character counts are in `char`s, so multi-byte phrases never get split
/// mid-codepoint.
#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    text_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    pub fn new<I, S>(texts: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let texts: Vec<Vec<char>> = texts
            .into_iter()
            .map(|s| s.as_ref().chars().collect::<Vec<_>>())
            .filter(|t| !t.is_empty())
            .collect();
        if texts.is_empty() {
            return None;
        }
        Some(Self {
            texts,
            text_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    /// Builds a typewriter from a `|`-separated attribute value.
    pub fn parse(attr: &str) -> Option<Self> {
        Self::new(attr.split(TYPING_DELIMITER))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn tick(&mut self) -> Step {
        let len = self.texts[self.text_index].len();
        let delay_ms = match self.phase {
            Phase::Typing | Phase::PausedAtEmpty => {
                self.char_index = (self.char_index + 1).min(len);
                if self.char_index == len {
                    self.phase = Phase::PausedAtFull;
                    HOLD_FULL_MS
                } else {
                    self.phase = Phase::Typing;
                    TYPE_DELAY_MS
                }
            }
            Phase::Deleting | Phase::PausedAtFull => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::PausedAtEmpty;
                    HOLD_EMPTY_MS
                } else {
                    self.phase = Phase::Deleting;
                    DELETE_DELAY_MS
                }
            }
        };
        let text: String = self.texts[self.text_index][..self.char_index]
            .iter()
            .collect();
        if self.phase == Phase::PausedAtEmpty {
            self.text_index = (self.text_index + 1) % self.texts.len();
        }
        Step { text, delay_ms }
    }
}
