//! Latin-script ruleset.

use crate::ruleset::{Ruleset, fold_compatibility, last_base_char, logical_char_count};

/// Initial word shown before the first move.
const INITIAL_WORD: &str = "START";

/// Endings that lose on the spot. `ん` is kept so mixed-script input
/// cannot dodge the rule.
const FORBIDDEN_TERMINALS: [char; 2] = ['n', 'ん'];

/// Case-insensitive Latin rules: words are lowercased, `n` endings lose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatinRuleset;

impl Ruleset for LatinRuleset {
    fn name(&self) -> &'static str {
        "latin"
    }

    fn initial_word(&self) -> &str {
        INITIAL_WORD
    }

    fn normalize_word(&self, raw: &str) -> String {
        fold_compatibility(raw).to_lowercase()
    }

    fn normalize_char(&self, c: char) -> char {
        // Multi-char lowercase expansions keep their leading char.
        c.to_lowercase().next().unwrap_or(c)
    }

    fn is_forbidden_terminal(&self, word: &str) -> bool {
        self.extract_target_char(word)
            .is_some_and(|last| FORBIDDEN_TERMINALS.contains(&last))
    }

    fn extract_target_char(&self, word: &str) -> Option<char> {
        last_base_char(word, &[]).map(|last| self.normalize_char(last))
    }

    fn logical_length(&self, word: &str) -> u32 {
        logical_char_count(word)
    }
}
