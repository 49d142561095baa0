use crate::chart::Edge;
use crate::display::History;
use crate::earley::Parse;
use crate::symbol::SymbolTable;

pub trait Rendered {
    fn rendered(&self) -> String;
}

const HEADERS: [&str; 4] = ["ID", "RULE", "[start, end]", "HIST"];

fn row(edge: &Edge, symbols: &SymbolTable) -> [String; 4] {
    [
        edge.id.to_string(),
        edge.rule.dotted(symbols).to_string(),
        edge.span.to_string(),
        History(&edge.history).to_string(),
    ]
}

/// Left-aligned columns separated by two spaces, with a header row.
fn table(rows: &[[String; 4]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(String::from);
    for cells in std::iter::once(&header).chain(rows.iter()) {
        let mut line = String::new();
        for (i, (cell, &width)) in cells.iter().zip(widths.iter()).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{:<width$}", cell, width = width));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

impl Rendered for Parse<'_> {
    /// The whole chart, one row per edge in creation order, then the parse
    /// count.
    fn rendered(&self) -> String {
        let symbols = self.grammar().symbols();
        let rows: Vec<[String; 4]> = self.chart().iter().map(|e| row(e, symbols)).collect();
        let mut out = table(&rows);
        out.push_str(&format!("Parse Count: {}\n", self.count()));
        out
    }
}

#[cfg(test)]
#[path = "tests/rendering.rs"]
mod tests_for_rendering;
