//! The chart: every edge built while parsing one sentence, in creation
//! order.
//!
//! An edge `A -> α • β` over `(i, j)` with history `[h_1 .. h_k]` claims
//! that the tokens `i+1 .. j` derive `α`, where `h_1 .. h_k` are the
//! (complete) edges that matched the `k` symbols of `α`. Since an edge can
//! only reference edges that already exist, ids double as a topological
//! order of the history graph.

use crate::symbol::Symbol;

use derive_more::Display;
use std::collections::HashMap;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(self) -> usize { self.0 }
}

/// Half-open range of token positions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
#[display(fmt = "({}, {})", start, end)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self { Span { start, end } }
    pub fn empty_at(pos: usize) -> Self { Span { start: pos, end: pos } }
}

/// A dotted production. The right-hand side borrows from the grammar.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rule<'g> {
    pub lhs: Symbol,
    pub rhs: &'g [Symbol],
    pub dot: usize,
}

impl<'g> Rule<'g> {
    pub fn new(lhs: Symbol, rhs: &'g [Symbol]) -> Self { Rule { lhs, rhs, dot: 0 } }

    pub fn is_complete(&self) -> bool { self.dot >= self.rhs.len() }

    /// The symbol right after the dot, if any.
    pub fn next_symbol(&self) -> Option<Symbol> { self.rhs.get(self.dot).copied() }

    pub fn advanced(&self) -> Self {
        debug_assert!(!self.is_complete());
        Rule { dot: self.dot + 1, ..*self }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Edge<'g> {
    pub id: EdgeId,
    pub rule: Rule<'g>,
    pub span: Span,
    pub history: Vec<EdgeId>,
}

/// Append-only; ids are positions.
///
/// Alongside the edges, pending edges are indexed by the position they end
/// at and the symbol they wait for, in insertion order, so completion can
/// find its partners without walking the whole chart. Lexical edges are
/// kept out of the index: they wait for a word, which never heads a
/// completed edge, and they are later rewritten in place.
#[derive(Debug, Default)]
pub struct Chart<'g> {
    edges: Vec<Edge<'g>>,
    awaiting: HashMap<(usize, Symbol), Vec<EdgeId>>,
}

impl<'g> Chart<'g> {
    pub fn new() -> Self {
        Chart { edges: Vec::new(), awaiting: HashMap::new() }
    }

    pub fn len(&self) -> usize { self.edges.len() }
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    pub fn get(&self, id: EdgeId) -> Option<&Edge<'g>> { self.edges.get(id.0) }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<'g>> { self.edges.iter() }

    /// Ids of the edges created at or after chart position `from`.
    pub(crate) fn ids_from(&self, from: usize) -> impl Iterator<Item=EdgeId> {
        (from..self.edges.len()).map(EdgeId)
    }

    pub(crate) fn push(&mut self, rule: Rule<'g>, span: Span, history: Vec<EdgeId>) -> EdgeId {
        let id = self.append(rule, span, history);
        if let Some(next) = rule.next_symbol() {
            self.awaiting.entry((span.end, next)).or_default().push(id);
        }
        id
    }

    pub(crate) fn push_lexical(&mut self, rule: Rule<'g>, span: Span) -> EdgeId {
        self.append(rule, span, Vec::new())
    }

    fn append(&mut self, rule: Rule<'g>, span: Span, history: Vec<EdgeId>) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { id, rule, span, history });
        id
    }

    /// Moves a lexical edge's dot over its word, extending its span by one
    /// token. This is the only in-place change the chart ever sees.
    pub(crate) fn promote(&mut self, id: EdgeId) -> &Edge<'g> {
        let edge = &mut self.edges[id.0];
        edge.rule = edge.rule.advanced();
        edge.span.end += 1;
        edge
    }

    /// The `nth` pending edge ending at `end` that waits for `symbol`.
    /// Edges pushed since an earlier call are visible to later ones.
    pub(crate) fn awaiting(&self, end: usize, symbol: Symbol, nth: usize) -> Option<EdgeId> {
        self.awaiting.get(&(end, symbol)).and_then(|ids| ids.get(nth)).copied()
    }
}

impl<'g> std::ops::Index<EdgeId> for Chart<'g> {
    type Output = Edge<'g>;
    fn index(&self, id: EdgeId) -> &Edge<'g> { &self.edges[id.0] }
}

impl<'a, 'g> IntoIterator for &'a Chart<'g> {
    type Item = &'a Edge<'g>;
    type IntoIter = std::slice::Iter<'a, Edge<'g>>;
    fn into_iter(self) -> Self::IntoIter { self.edges.iter() }
}
