//! Pluggable word-chain rules.
//!
//! A [`Ruleset`] captures everything that differs between scripts: how words
//! and characters are normalized, which endings lose immediately, how the
//! next target character is extracted, and how a word is scored. The session
//! engine only ever talks to this trait.

use crate::{KanaRuleset, LatinRuleset};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::instrument;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Script-specific rules for the word chain.
pub trait Ruleset: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// The word the chain starts from before anyone has played.
    fn initial_word(&self) -> &str;

    /// Trims a raw submission and applies case/script normalization.
    fn normalize_word(&self, raw: &str) -> String;

    /// Maps a character to its canonical form for comparisons.
    fn normalize_char(&self, c: char) -> char;

    /// Returns true if two characters form a valid chain link.
    fn equivalent(&self, a: char, b: char) -> bool {
        self.normalize_char(a) == self.normalize_char(b)
    }

    /// Returns true if the word ends on a character that loses the game.
    fn is_forbidden_terminal(&self, word: &str) -> bool;

    /// Extracts the character the next word must start with.
    ///
    /// Returns `None` when the word has no usable character.
    fn extract_target_char(&self, word: &str) -> Option<char>;

    /// Number of points the word is worth.
    fn logical_length(&self, word: &str) -> u32;
}

/// Built-in rulesets, selectable by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RulesetKind {
    /// Latin script, case-insensitive, `n` loses.
    #[default]
    Latin,
    /// Japanese kana, hiragana and katakana interchangeable, `ん` loses.
    Kana,
}

impl RulesetKind {
    /// Instantiates the ruleset.
    #[instrument]
    pub fn build(self) -> Arc<dyn Ruleset> {
        match self {
            Self::Latin => Arc::new(LatinRuleset),
            Self::Kana => Arc::new(KanaRuleset),
        }
    }
}

/// How a ruleset judges a single submission against a target character.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Judgement {
    /// The normalized word.
    word: String,
    /// Whether the word starts with the target character.
    chains: bool,
    /// Whether the word ends on a forbidden terminal.
    forbidden_terminal: bool,
    /// Points the word would score.
    points: u32,
    /// Target character the word would leave for the next player.
    next_target: Option<char>,
}

impl Judgement {
    /// Returns true if the normalized word is empty.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.word.is_empty() {
            return write!(f, "empty word");
        }
        write!(f, "{:?}: ", self.word)?;
        if !self.chains {
            return write!(f, "does not chain");
        }
        if self.forbidden_terminal {
            return write!(f, "ends on a forbidden terminal");
        }
        write!(f, "{} points", self.points)?;
        match self.next_target {
            Some(c) => write!(f, ", next word starts with '{c}'"),
            None => write!(f, ", leaves no target character"),
        }
    }
}

/// Judges `raw` against `target` without touching any session.
#[instrument(skip(ruleset), fields(ruleset = ruleset.name()))]
pub fn judge(ruleset: &dyn Ruleset, target: char, raw: &str) -> Judgement {
    let word = ruleset.normalize_word(raw);
    let chains = word
        .chars()
        .next()
        .is_some_and(|first| ruleset.equivalent(first, target));
    let forbidden_terminal = !word.is_empty() && ruleset.is_forbidden_terminal(&word);
    let points = ruleset.logical_length(&word);
    let next_target = ruleset.extract_target_char(&word);

    Judgement {
        word,
        chains,
        forbidden_terminal,
        points,
        next_target,
    }
}

/// Trims and applies NFKC, so decomposed sequences compose and
/// half-width or full-width forms fold to their standard width.
pub(crate) fn fold_compatibility(raw: &str) -> String {
    raw.trim().nfkc().collect()
}

/// Counts characters that stand on their own, skipping combining marks
/// left over after composition. Saturates at `u32::MAX`.
pub(crate) fn logical_char_count(word: &str) -> u32 {
    let count = word.chars().filter(|&c| !is_combining_mark(c)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Last character that is not a combining mark.
pub(crate) fn last_base_char(word: &str, skip: &[char]) -> Option<char> {
    word.chars()
        .rev()
        .find(|&c| !is_combining_mark(c) && !skip.contains(&c))
}
