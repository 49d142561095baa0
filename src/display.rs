use crate::chart::{EdgeId, Rule};
use crate::symbol::SymbolTable;

const DOT: char = '•';

/// A rule in dotted notation, e.g. `S -> NP • VP`. Symbol names come from
/// the table the rule's symbols were interned in.
pub struct Dotted<'a, 'g> {
    rule: &'a Rule<'g>,
    symbols: &'a SymbolTable,
}

impl<'g> Rule<'g> {
    pub fn dotted<'a>(&'a self, symbols: &'a SymbolTable) -> Dotted<'a, 'g> {
        Dotted { rule: self, symbols }
    }
}

impl std::fmt::Display for Dotted<'_, '_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Dotted { rule, symbols } = self;
        let (before, after) = rule.rhs.split_at(rule.dot.min(rule.rhs.len()));
        write!(w, "{} ->", symbols.name(rule.lhs))?;
        for &sym in before {
            write!(w, " {}", symbols.name(sym))?;
        }
        write!(w, " {}", DOT)?;
        for &sym in after {
            write!(w, " {}", symbols.name(sym))?;
        }
        Ok(())
    }
}

/// Comma separated edge ids; empty for an empty history.
pub struct History<'a>(pub &'a [EdgeId]);

impl std::fmt::Display for History<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut ids = self.0.iter();
        if let Some(first) = ids.next() {
            write!(w, "{}", first)?;
            for id in ids {
                write!(w, ", {}", id)?;
            }
        }
        Ok(())
    }
}
