//! Earley chart parsing of natural-language sentences against a word-level
//! context-free grammar: rewrite rules over nonterminals, plus a lexicon
//! mapping part-of-speech categories to the surface words they accept.
//!
//! Every derivation is kept. The resulting chart is the full derivation
//! forest (each edge records the ids of the sub-edges it was built from) and
//! the parse count is the number of distinct derivations of the start symbol
//! over the whole sentence.
//!
//! ```
//! use chartwright::{parse_sentence, Grammar};
//!
//! let grammar = Grammar::builder()
//!     .rule("S", ["NP VP"])
//!     .rule("NP", ["N PP", "N"])
//!     .rule("PP", ["P NP"])
//!     .rule("VP", ["VP PP", "V VP", "V NP", "V"])
//!     .lexical("N", ["they", "can", "fish", "rivers", "december"])
//!     .lexical("P", ["in"])
//!     .lexical("V", ["can", "fish"])
//!     .build();
//! assert_eq!(parse_sentence(&grammar, "They can fish in rivers.").count(), 4);
//! ```

#[macro_use] extern crate lalrpop_util;

mod chart;
mod display;
mod earley;
mod grammar;
mod preprocess;
mod rendering;
mod symbol;

lalrpop_mod!(grammar_text); // synthesized by LALRPOP

pub use chart::{Chart, Edge, EdgeId, Rule, Span};
pub use display::{Dotted, History};
pub use earley::{Earley, Parse, ParseCounter};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, GrammarTable, LexiconTable, DEFAULT_START};
pub use preprocess::{parse_sentence, tokenize};
pub use rendering::Rendered;
pub use symbol::{Symbol, SymbolKind, SymbolTable};

/// Parses already-tokenized input.
pub fn parse<'g, S: AsRef<str>>(grammar: &'g Grammar, tokens: &[S]) -> Parse<'g> {
    Earley::new(grammar, tokens).run()
}
