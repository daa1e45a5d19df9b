//! Looping typewriter headline.
//!
//! The machine is driven by a timer in the web frontend: each call to
//! [`Typewriter::step`] performs one transition and returns how long to wait
//! before the next call. The text to display is always [`Typewriter::text`].

use crate::constants::{DELETE_DELAY, PAUSE_AFTER_DELETE, PAUSE_AFTER_TYPE, TYPE_DELAY};
use std::time::Duration;

/// Phrases cycled through by the hero heading.
pub const DEFAULT_PHRASES: &[&str] = &[
    "Full Stack Web Developer",
    "Problem Solver",
    "Creative Thinker",
    "SEO Specialist",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAfterType,
    Deleting,
    AdvancingAfterDelete,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Number of characters (not bytes) of the current phrase on display.
    char_index: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` for an empty phrase list; the headline then stays inert.
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    pub fn with_default_phrases() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[inline]
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// Visible prefix of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_index) {
            Some((byte_end, _)) => &phrase[..byte_end],
            None => phrase,
        }
    }

    /// Advance one transition and return the delay until the next step.
    pub fn step(&mut self) -> Duration {
        let len = self.current_phrase().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.char_index < len {
                    self.char_index += 1;
                }
                if self.char_index >= len {
                    self.phase = Phase::PausedAfterType;
                }
                TYPE_DELAY
            }
            Phase::PausedAfterType => {
                self.phase = Phase::Deleting;
                PAUSE_AFTER_TYPE
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::AdvancingAfterDelete;
                }
                DELETE_DELAY
            }
            Phase::AdvancingAfterDelete => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.char_index = 0;
                self.phase = Phase::Typing;
                PAUSE_AFTER_DELETE
            }
        }
    }
}
