use crate::symbol::{Symbol, SymbolKind, SymbolTable};

use linear_map::LinearMap;
use std::path::Path;
use thiserror::Error;

// A grammar G is a tuple (N, C, W, S, R, L), where
//   N is a finite set of nonterminals
//   C is a finite set of part-of-speech categories
//   W is a finite set of surface words
//   S in N is the start symbol
//   R maps nonterminals to ordered lists of right-hand sides over (N u C)*
//   L maps categories to ordered lists of words in W
//
// R is the `GrammarTable`, L the `LexiconTable`. Neither is validated:
// symbols used but never defined simply have no alternatives.

#[derive(Debug)]
pub struct Grammar {
    symbols: SymbolTable,
    start: Symbol,
    syntax: GrammarTable,
    lexicon: LexiconTable,
}

/// Rewrite alternatives, indexed by symbol.
#[derive(Debug, Default)]
pub struct GrammarTable(Vec<Vec<Vec<Symbol>>>);

/// Accepted surface words, indexed by category.
#[derive(Debug, Default)]
pub struct LexiconTable(Vec<Vec<Symbol>>);

impl GrammarTable {
    /// Alternatives of `nonterm` in authoring order; empty when it has none.
    pub fn alternatives(&self, nonterm: Symbol) -> &[Vec<Symbol>] {
        self.0.get(nonterm.index()).map(|alts| &alts[..]).unwrap_or(&[])
    }
}

impl LexiconTable {
    /// Words of `category` in authoring order; empty when it has none.
    pub fn words(&self, category: Symbol) -> &[Symbol] {
        self.0.get(category.index()).map(|words| &words[..]).unwrap_or(&[])
    }
}

impl Grammar {
    pub fn builder() -> GrammarBuilder { GrammarBuilder::new() }

    pub fn start(&self) -> Symbol { self.start }
    pub fn symbols(&self) -> &SymbolTable { &self.symbols }
    pub fn syntax(&self) -> &GrammarTable { &self.syntax }
    pub fn lexicon(&self) -> &LexiconTable { &self.lexicon }

    pub fn kind(&self, sym: Symbol) -> SymbolKind { self.symbols.kind(sym) }
    pub fn name(&self, sym: Symbol) -> &str { self.symbols.name(sym) }

    /// Parses the text form of a grammar, e.g.
    ///
    /// ```text
    /// %start S;
    /// S  ::= NP VP;
    /// NP ::= N PP | N;
    /// N  :  they | fish;
    /// ```
    pub fn from_text(text: &str) -> Result<Grammar, GrammarError> {
        let decls = crate::grammar_text::DocumentParser::new()
            .parse(text)
            .map_err(|e| GrammarError::Syntax(e.to_string()))?;
        let mut builder = GrammarBuilder::new();
        for decl in decls {
            builder = match decl {
                Decl::Start(name) => builder.start(&name),
                Decl::Rule(lhs, alts) => alts
                    .into_iter()
                    .fold(builder, |b, rhs| b.alternative(&lhs, rhs)),
                Decl::Lexical(category, words) => builder.lexical(&category, words),
            };
        }
        Ok(builder.build())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Grammar, GrammarError> {
        let text = fs_err::read_to_string(path.as_ref())?;
        Self::from_text(&text)
    }
}

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("grammar syntax error: {0}")]
    Syntax(String),
}

/// One declaration of the grammar text format; produced by the generated
/// `grammar_text` parser.
#[derive(PartialEq, Eq, Debug)]
pub enum Decl {
    Start(String),
    Rule(String, Vec<Vec<String>>),
    Lexical(String, Vec<String>),
}

pub const DEFAULT_START: &str = "S";

/// Collects rules and lexical entries in authoring order; `build` interns
/// every name and fixes each symbol's kind.
#[derive(Debug)]
pub struct GrammarBuilder {
    start: String,
    rules: LinearMap<String, Vec<Vec<String>>>,
    lexicon: LinearMap<String, Vec<String>>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        GrammarBuilder {
            start: DEFAULT_START.to_string(),
            rules: LinearMap::new(),
            lexicon: LinearMap::new(),
        }
    }

    pub fn start(mut self, name: &str) -> Self {
        self.start = name.to_string();
        self
    }

    /// Adds rewrite alternatives for `lhs`; each alternative is a
    /// whitespace-separated list of symbol names.
    pub fn rule<I, S>(self, lhs: &str, alternatives: I) -> Self
    where I: IntoIterator<Item=S>, S: AsRef<str>
    {
        alternatives.into_iter().fold(self, |b, alt| {
            let rhs = alt.as_ref().split_whitespace().map(String::from).collect();
            b.alternative(lhs, rhs)
        })
    }

    pub fn lexical<I, S>(mut self, category: &str, words: I) -> Self
    where I: IntoIterator<Item=S>, S: AsRef<str>
    {
        let entry = self.lexicon.entry(category.to_string()).or_insert(Vec::new());
        entry.extend(words.into_iter().map(|w| w.as_ref().to_string()));
        self
    }

    fn alternative(mut self, lhs: &str, rhs: Vec<String>) -> Self {
        self.rules.entry(lhs.to_string()).or_insert(Vec::new()).push(rhs);
        self
    }

    pub fn build(self) -> Grammar {
        let mut symbols = SymbolTable::new();
        let start = symbols.intern(&self.start);

        let mut syntax: Vec<(Symbol, Vec<Vec<Symbol>>)> = Vec::new();
        for (lhs, alts) in self.rules.iter() {
            let lhs = symbols.intern(lhs);
            let alts = alts.iter()
                .map(|rhs| rhs.iter().map(|name| symbols.intern(name)).collect())
                .collect();
            syntax.push((lhs, alts));
        }

        let mut lexicon: Vec<(Symbol, Vec<Symbol>)> = Vec::new();
        for (category, words) in self.lexicon.iter() {
            let category = symbols.intern(category);
            let words = words.iter().map(|w| symbols.intern(w)).collect();
            lexicon.push((category, words));
        }

        // Later passes win: a rule head is a nonterminal even if it also
        // names a category or a word.
        for (_, words) in &lexicon {
            for &w in words { symbols.classify(w, SymbolKind::Word); }
        }
        for &(category, _) in &lexicon {
            symbols.classify(category, SymbolKind::Category);
        }
        for &(lhs, _) in &syntax {
            symbols.classify(lhs, SymbolKind::Nonterminal);
        }

        let mut rules_by_symbol = vec![Vec::new(); symbols.len()];
        for (lhs, alts) in syntax {
            rules_by_symbol[lhs.index()].extend(alts);
        }
        let mut words_by_symbol = vec![Vec::new(); symbols.len()];
        for (category, words) in lexicon {
            words_by_symbol[category.index()].extend(words);
        }

        Grammar {
            symbols,
            start,
            syntax: GrammarTable(rules_by_symbol),
            lexicon: LexiconTable(words_by_symbol),
        }
    }
}

impl Default for GrammarBuilder {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
