// This is actually defined at `crate::grammar::tests_for_grammar`

use crate::grammar::*;
use crate::tests::*;
use crate::{grammar_text, Symbol, SymbolKind};

fn names(g: &Grammar, syms: &[Symbol]) -> Vec<String> {
    syms.iter().map(|&s| g.name(s).to_string()).collect()
}

fn sym(g: &Grammar, name: &str) -> Symbol {
    g.symbols().lookup(name).unwrap_or_else(|| panic!("no symbol {}", name))
}

#[test]
fn builder_keeps_authoring_order() {
    let g = fishing_grammar();
    let vp = sym(&g, "VP");
    let alts: Vec<Vec<String>> = g.syntax().alternatives(vp).iter().map(|a| names(&g, a)).collect();
    assert_eq!(alts, [vec!["VP", "PP"], vec!["V", "VP"], vec!["V", "NP"], vec!["V"]]);
    assert_eq!(names(&g, g.lexicon().words(sym(&g, "V"))), ["can", "fish"]);
    assert_eq!(g.name(g.start()), DEFAULT_START);
}

#[test]
fn kinds_are_fixed_at_build() {
    let g = fishing_grammar();
    assert_eq!(g.kind(sym(&g, "S")), SymbolKind::Nonterminal);
    assert_eq!(g.kind(sym(&g, "PP")), SymbolKind::Nonterminal);
    assert_eq!(g.kind(sym(&g, "N")), SymbolKind::Category);
    assert_eq!(g.kind(sym(&g, "rivers")), SymbolKind::Word);
    // "can" is listed under two categories; it is still one symbol
    assert_eq!(g.lexicon().words(sym(&g, "N"))[1], g.lexicon().words(sym(&g, "V"))[0]);
}

#[test]
fn rule_heads_win_over_categories() {
    let g = Grammar::builder()
        .rule("S", ["X"])
        .rule("X", ["Y"])
        .lexical("X", ["x"])
        .lexical("Y", ["X"])
        .build();
    assert_eq!(g.kind(sym(&g, "X")), SymbolKind::Nonterminal);
    assert_eq!(g.kind(sym(&g, "Y")), SymbolKind::Category);
    assert_eq!(g.kind(sym(&g, "x")), SymbolKind::Word);
}

#[test]
fn unknown_lookups_are_empty() {
    let g = fishing_grammar();
    assert!(g.syntax().alternatives(sym(&g, "N")).is_empty());
    assert!(g.lexicon().words(sym(&g, "NP")).is_empty());
    assert!(g.symbols().lookup("eat").is_none());
}

#[test]
fn repeated_declarations_append() {
    let g = Grammar::builder()
        .rule("NP", ["N"])
        .lexical("N", ["they"])
        .rule("NP", ["N PP"])
        .lexical("N", ["fish"])
        .build();
    assert_eq!(g.syntax().alternatives(sym(&g, "NP")).len(), 2);
    assert_eq!(names(&g, g.lexicon().words(sym(&g, "N"))), ["they", "fish"]);
}

#[test]
fn grammar_text_declarations() {
    let decls = grammar_text::DocumentParser::new()
        .parse("%start Top; Top ::= A B | B; A : a | an;")
        .unwrap();
    assert_eq!(decls, vec![
        Decl::Start("Top".into()),
        Decl::Rule("Top".into(), vec![vec!["A".into(), "B".into()], vec!["B".into()]]),
        Decl::Lexical("A".into(), vec!["a".into(), "an".into()]),
    ]);
}

#[test]
fn grammar_text_start_symbol() {
    let g = Grammar::from_text("%start Top; Top ::= A; A : a;").unwrap();
    assert_eq!(g.name(g.start()), "Top");
    assert_eq!(crate::parse(&g, &["a"]).count(), 1);
}

#[test]
fn grammar_text_matches_builder() {
    let text = Grammar::from_text(FISHING_GRAMMAR_TEXT).unwrap();
    let built = fishing_grammar();
    let listing = |g: &Grammar| -> Vec<(String, SymbolKind)> {
        g.symbols().iter().map(|(s, n)| (n.to_string(), g.kind(s))).collect()
    };
    assert_eq!(listing(&text), listing(&built));
}

#[test]
fn grammar_text_syntax_errors() {
    for bad in ["S ::= NP VP", "S ::= ;", "S NP VP;", "N : they can;", "::= A;"] {
        match Grammar::from_text(bad) {
            Err(GrammarError::Syntax(_)) => {}
            other => panic!("{:?} should be a syntax error, got {:?}", bad, other),
        }
    }
}

#[test]
fn empty_text_is_an_empty_grammar() {
    let g = Grammar::from_text("").unwrap();
    assert!(g.syntax().alternatives(g.start()).is_empty());
    assert_eq!(g.kind(g.start()), SymbolKind::Unknown);
}

#[test]
fn grammar_from_path() -> Result<(), GrammarError> {
    let file = temp_file::with_contents(FISHING_GRAMMAR_TEXT.as_bytes());
    let g = Grammar::from_path(file.path())?;
    assert_eq!(crate::parse_sentence(&g, "They can fish in rivers.").count(), 4);
    Ok(())
}

#[test]
fn grammar_from_dir() -> Result<(), GrammarError> {
    let dir = temp_dir::TempDir::new()?;
    let path = dir.child("tiny.grammar");
    fs_err::write(&path, "S ::= NP VP; NP ::= N; VP ::= V; N : they; V : fish;")?;
    let g = Grammar::from_path(&path)?;
    assert_eq!(crate::parse(&g, &["they", "fish"]).count(), 1);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = temp_dir::TempDir::new().unwrap();
    let err = Grammar::from_path(dir.child("nope.grammar")).unwrap_err();
    assert!(matches!(err, GrammarError::Io(_)), "{:?}", err);
    assert!(err.to_string().contains("nope.grammar"), "{}", err);
}
