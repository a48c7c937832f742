//! Typewriter cycle: type a word out, hold, delete it, move to the next.

use crate::constants::{TYPE_DELAY_MS, WORD_GAP_MS, WORD_HOLD_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Typing,
    Deleting,
}

/// Text to display after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word_index: usize,
    char_index: usize,
    direction: Direction,
}

impl Typewriter {
    /// Returns `None` when no non-empty word remains.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect::<Vec<_>>())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word_index: 0,
            char_index: 0,
            direction: Direction::Typing,
        })
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tick(&mut self) -> Step {
        let word = &self.words[self.word_index];
        match self.direction {
            Direction::Typing => self.char_index = (self.char_index + 1).min(word.len()),
            Direction::Deleting => self.char_index = self.char_index.saturating_sub(1),
        }
        let text: String = word[..self.char_index].iter().collect();

        let delay_ms = if self.char_index == word.len() && self.direction == Direction::Typing {
            self.direction = Direction::Deleting;
            WORD_HOLD_MS
        } else if self.char_index == 0 && self.direction == Direction::Deleting {
            self.direction = Direction::Typing;
            self.word_index = (self.word_index + 1) % self.words.len();
            WORD_GAP_MS
        } else {
            TYPE_DELAY_MS
        };
        Step { text, delay_ms }
    }
}
