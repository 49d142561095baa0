//! Sentence normalization: the engine only ever sees the output of
//! `tokenize`.

use crate::earley::{Earley, Parse};
use crate::grammar::Grammar;

use regex::Regex;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static PUNCT: OnceLock<Regex> = OnceLock::new();
    // ASCII punctuation only; non-ASCII symbols stay part of their word.
    PUNCT.get_or_init(|| Regex::new(r"[[:punct:]]").expect("valid punctuation class"))
}

/// Drops ASCII punctuation, lowercases, and splits on whitespace.
///
/// Punctuation is removed rather than treated as a separator, so `"don't"`
/// becomes the single token `"dont"`.
pub fn tokenize(sentence: &str) -> Vec<String> {
    punctuation()
        .replace_all(sentence, "")
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Tokenizes `sentence` and parses the tokens against `grammar`.
pub fn parse_sentence<'g>(grammar: &'g Grammar, sentence: &str) -> Parse<'g> {
    Earley::new(grammar, &tokenize(sentence)).run()
}

#[cfg(test)]
#[path = "tests/preprocess.rs"]
mod tests_for_preprocess;
