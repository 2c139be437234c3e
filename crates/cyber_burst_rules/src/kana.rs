//! Japanese kana ruleset (shiritori).
//!
//! Hiragana and katakana are interchangeable: submissions are NFKC-folded,
//! which composes voicing marks and widens half-width katakana, and every
//! comparison then folds katakana onto hiragana. A trailing prolongation mark defers to the
//! character before it, and small kana count as their full-size forms when
//! they end a word.

use crate::ruleset::{Ruleset, fold_compatibility, last_base_char, logical_char_count};

/// Initial word shown before the first move.
const INITIAL_WORD: &str = "しりとり";

/// Ending that loses on the spot.
const FORBIDDEN_TERMINAL: char = 'ん';

/// Full-width and half-width prolongation marks. The half-width form only
/// reaches the ruleset when a caller skips `normalize_word`.
const PROLONGATION_MARKS: [char; 2] = ['ー', 'ｰ'];

/// Distance from a katakana code point to its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Kana rules: script-insensitive, `ん` endings lose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KanaRuleset;

/// Folds katakana (ァ..ヶ) onto hiragana (ぁ..ゖ).
fn to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Maps small hiragana to their full-size base.
fn full_size(c: char) -> char {
    match c {
        'ぁ' => 'あ',
        'ぃ' => 'い',
        'ぅ' => 'う',
        'ぇ' => 'え',
        'ぉ' => 'お',
        'っ' => 'つ',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        'ゎ' => 'わ',
        'ゕ' => 'か',
        'ゖ' => 'け',
        other => other,
    }
}

impl Ruleset for KanaRuleset {
    fn name(&self) -> &'static str {
        "kana"
    }

    fn initial_word(&self) -> &str {
        INITIAL_WORD
    }

    fn normalize_word(&self, raw: &str) -> String {
        fold_compatibility(raw)
    }

    fn normalize_char(&self, c: char) -> char {
        to_hiragana(c)
    }

    fn is_forbidden_terminal(&self, word: &str) -> bool {
        self.extract_target_char(word) == Some(FORBIDDEN_TERMINAL)
    }

    fn extract_target_char(&self, word: &str) -> Option<char> {
        last_base_char(word, &PROLONGATION_MARKS).map(|c| full_size(to_hiragana(c)))
    }

    fn logical_length(&self, word: &str) -> u32 {
        logical_char_count(word)
    }
}
