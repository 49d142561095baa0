use std::collections::HashMap;

/// An interned grammar symbol. Only meaningful relative to the
/// `SymbolTable` (and thus the `Grammar`) that produced it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Symbol(u32);

impl Symbol {
    pub(crate) fn index(self) -> usize { self.0 as usize }
}

/// What role a symbol plays, decided once when the grammar is built.
///
/// A name that is both a rewrite-rule head and a lexical category is a
/// `Nonterminal`; its lexical entries are never consulted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    /// Has rewrite alternatives in the grammar table.
    Nonterminal,
    /// Part-of-speech category with entries in the lexicon table.
    Category,
    /// A surface word listed under some category.
    Word,
    /// Mentioned somewhere (e.g. on a right-hand side, or as the start
    /// symbol) but defined nowhere. Expands to nothing.
    Unknown,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    kinds: Vec<SymbolKind>,
    by_name: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self { Self::default() }

    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.by_name.get(name) {
            return sym;
        }
        let sym = Symbol(self.names.len() as u32);
        self.names.push(name.to_string());
        self.kinds.push(SymbolKind::Unknown);
        self.by_name.insert(name.to_string(), sym);
        sym
    }

    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, sym: Symbol) -> &str {
        &self.names[sym.index()]
    }

    pub fn kind(&self, sym: Symbol) -> SymbolKind {
        self.kinds[sym.index()]
    }

    pub(crate) fn classify(&mut self, sym: Symbol, kind: SymbolKind) {
        self.kinds[sym.index()] = kind;
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item=(Symbol, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (Symbol(i as u32), &n[..]))
    }
}
