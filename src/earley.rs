//! Earley chart parsing over a word-level grammar.
//!
//! Each input token is handled by one *stage*:
//!
//! * predict: starting from the edges the previous stage completed, expand
//!   the symbol after each dot top-down. Nonterminals get one fresh edge per
//!   alternative (and are expanded in turn); categories get one lexical edge
//!   per word, but only for words equal to the upcoming token.
//! * scan: move the dot of each of those lexical edges over its word.
//! * complete: feed every newly complete edge to the pending edges waiting
//!   for it, repeatedly, until nothing new completes.
//!
//! Complete never merges edges: two completions that differ only in their
//! history are two derivations, and each one whose root is the start symbol
//! over the whole input counts as a separate parse.

use crate::chart::{Chart, EdgeId, Rule, Span};
use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolKind};

use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

#[derive(Clone, PartialEq, Eq, Debug)]
struct Token {
    text: String,
    /// `None` when the word is unknown to the grammar; it then matches no
    /// lexical entry.
    symbol: Option<Symbol>,
}

/// Completed derivations of the start symbol over the whole input.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ParseCounter {
    accepted: Vec<EdgeId>,
}

impl ParseCounter {
    fn record(&mut self, id: EdgeId) { self.accepted.push(id); }
    pub fn count(&self) -> usize { self.accepted.len() }
    pub fn accepted(&self) -> &[EdgeId] { &self.accepted }
}

/// The chart engine for one sentence. Consumed by `run`; parsing another
/// sentence takes another engine.
#[derive(Debug)]
pub struct Earley<'g> {
    grammar: &'g Grammar,
    tokens: Vec<Token>,
    chart: Chart<'g>,
    /// The number of input tokens scanned so far.
    consumed: usize,
    /// Chart length at the end of the last scan; edges from here on were
    /// made by the last complete and seed the next predict.
    stage_boundary: usize,
    /// Lexical edges made by the current predict, awaiting scan.
    lexical_frontier: Vec<EdgeId>,
    counter: ParseCounter,
}

impl<'g> Earley<'g> {
    pub fn new<S: AsRef<str>>(grammar: &'g Grammar, tokens: &[S]) -> Self {
        let tokens = tokens.iter()
            .map(|t| {
                let text = t.as_ref().to_string();
                let symbol = grammar.symbols().lookup(&text);
                Token { text, symbol }
            })
            .collect();

        let mut chart = Chart::new();
        let start = grammar.start();
        for rhs in grammar.syntax().alternatives(start) {
            chart.push(Rule::new(start, rhs), Span::empty_at(0), Vec::new());
        }

        Earley {
            grammar,
            tokens,
            chart,
            consumed: 0,
            stage_boundary: 0,
            lexical_frontier: Vec::new(),
            counter: ParseCounter::default(),
        }
    }

    pub fn chart(&self) -> &Chart<'g> { &self.chart }

    /// Runs one stage per token.
    pub fn run(mut self) -> Parse<'g> {
        let mut stages = 0;
        while self.consumed < self.tokens.len() {
            debug!(stage = stages,
                   token = %self.tokens[self.consumed].text,
                   edges = self.chart.len(),
                   "earley stage");
            self.predict();
            let scanned = self.scan();
            self.complete(scanned);
            stages += 1;
        }
        debug!(edges = self.chart.len(), parses = self.counter.count(), "earley done");

        Parse {
            grammar: self.grammar,
            chart: self.chart,
            counter: self.counter,
            token_count: self.tokens.len(),
            stages,
        }
    }

    fn lookahead(&self) -> Option<Symbol> {
        self.tokens.get(self.consumed).and_then(|t| t.symbol)
    }

    pub(crate) fn predict(&mut self) {
        let grammar = self.grammar;
        let lookahead = self.lookahead();
        let mut worklist: VecDeque<EdgeId> = self.chart.ids_from(self.stage_boundary).collect();
        let mut seen: HashSet<(Symbol, &'g [Symbol])> = HashSet::new();
        if self.consumed == 0 {
            // the start edges are already this stage's predictions at 0
            let start = grammar.start();
            seen.extend(grammar.syntax().alternatives(start).iter().map(|rhs| (start, &rhs[..])));
        }

        while let Some(id) = worklist.pop_front() {
            let edge = &self.chart[id];
            let at = edge.span.end;
            let next = if let Some(next) = edge.rule.next_symbol() { next } else { continue };

            match grammar.kind(next) {
                SymbolKind::Nonterminal => {
                    for rhs in grammar.syntax().alternatives(next) {
                        if seen.insert((next, &rhs[..])) {
                            let new_id = self.chart.push(Rule::new(next, rhs), Span::empty_at(at), Vec::new());
                            trace!(id = %new_id, at, "predicted");
                            worklist.push_back(new_id);
                        }
                    }
                }
                SymbolKind::Category => {
                    for word in grammar.lexicon().words(next) {
                        if Some(*word) != lookahead {
                            continue;
                        }
                        let rhs = std::slice::from_ref(word);
                        if seen.insert((next, rhs)) {
                            let new_id = self.chart.push_lexical(Rule::new(next, rhs), Span::empty_at(at));
                            trace!(id = %new_id, at, "predicted lexical");
                            self.lexical_frontier.push(new_id);
                        }
                    }
                }
                SymbolKind::Word | SymbolKind::Unknown => {}
            }
        }
    }

    pub(crate) fn scan(&mut self) -> VecDeque<EdgeId> {
        let scanned: VecDeque<EdgeId> = self.lexical_frontier.drain(..).collect();
        for &id in &scanned {
            let edge = self.chart.promote(id);
            trace!(id = %id, span = %edge.span, "scanned");
        }
        if scanned.is_empty() {
            debug!(position = self.consumed,
                   token = %self.tokens[self.consumed].text,
                   "no lexical entry matches token");
        }

        self.consumed += 1;
        self.stage_boundary = self.chart.len();
        scanned
    }

    pub(crate) fn complete(&mut self, mut worklist: VecDeque<EdgeId>) {
        while let Some(completed) = worklist.pop_front() {
            let (lhs, completed_span) = {
                let edge = &self.chart[completed];
                (edge.rule.lhs, edge.span)
            };

            let mut nth = 0;
            while let Some(pending) = self.chart.awaiting(completed_span.start, lhs, nth) {
                nth += 1;
                let (rule, start, mut history) = {
                    let edge = &self.chart[pending];
                    (edge.rule.advanced(), edge.span.start, edge.history.clone())
                };
                history.push(completed);
                let span = Span::new(start, completed_span.end);
                let new_id = self.chart.push(rule, span, history);
                trace!(id = %new_id, span = %span, dot = rule.dot, "completed");

                if rule.is_complete() {
                    if self.accepts(&rule, span) {
                        debug!(id = %new_id, "accepted parse");
                        self.counter.record(new_id);
                    } else {
                        worklist.push_back(new_id);
                    }
                }
            }
        }
    }

    fn accepts(&self, rule: &Rule<'g>, span: Span) -> bool {
        let n = self.tokens.len();
        rule.lhs == self.grammar.start() && span == Span::new(0, n) && self.consumed == n
    }
}

/// Result of a finished run: the full chart plus the accepted derivations.
#[derive(Debug)]
pub struct Parse<'g> {
    grammar: &'g Grammar,
    chart: Chart<'g>,
    counter: ParseCounter,
    token_count: usize,
    stages: usize,
}

impl<'g> Parse<'g> {
    pub fn grammar(&self) -> &'g Grammar { self.grammar }
    pub fn chart(&self) -> &Chart<'g> { &self.chart }
    pub fn count(&self) -> usize { self.counter.count() }
    /// Ids of the complete start-symbol edges, one per derivation.
    pub fn accepted(&self) -> &[EdgeId] { self.counter.accepted() }
    pub fn token_count(&self) -> usize { self.token_count }
    pub fn stages(&self) -> usize { self.stages }
}

#[cfg(test)]
#[path = "tests/earley.rs"]
mod tests_for_earley;
