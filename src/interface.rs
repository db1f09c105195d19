//! Synchronous interface for running searches over a loaded dataset.
//!
//! This module ties the pieces together: an injected translator produces raw
//! clause text, the sift parser extracts what it can, and the engine applies
//! the surviving clauses to the record set. Everything runs on the calling
//! thread; parse and execute are pure transformations and the translator call
//! is the only operation that may block.

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::record::Row;
use crate::sift::{Clause, Engine, Selection, Skipped, parse_clauses};
use crate::translate::Translate;

/// Everything a search produced: the raw clause text, what the parser made
/// of it, and the selected rows.
#[derive(Debug)]
pub struct SearchOutcome {
    pub clause_text: String,
    pub clauses: Vec<Clause>,
    pub skipped: Vec<Skipped>,
    pub selection: Selection,
}

/// A catalog and a loaded record set, ready to answer searches.
///
/// Construction observes the categorical domains once; afterwards neither
/// the catalog nor the rows are mutated, so searches share no state and may
/// be issued back to back with fresh working sets each time.
pub struct SearchInterface {
    catalog: Catalog,
    rows: Vec<Row>,
}

impl SearchInterface {
    pub fn new(mut catalog: Catalog, rows: Vec<Row>) -> Self {
        catalog.observe(&rows);
        Self { catalog, rows }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Translate a free-text query and run the result.
    pub fn search(&self, query: &str, translator: &dyn Translate) -> Result<SearchOutcome> {
        let clause_text = translator.translate(query, &self.catalog)?;
        self.run_clauses(&clause_text)
    }

    /// Run raw clause text directly, skipping the translator.
    pub fn run_clauses(&self, clause_text: &str) -> Result<SearchOutcome> {
        let parsed = parse_clauses(clause_text);
        let engine = Engine::new(&self.catalog);
        let selection = engine.execute(&self.rows, &parsed.clauses)?;
        info!(
            rows = selection.row_count,
            limited = selection.limited,
            skipped = parsed.skipped.len(),
            "search complete"
        );
        Ok(SearchOutcome {
            clause_text: clause_text.to_string(),
            clauses: parsed.clauses,
            skipped: parsed.skipped,
            selection,
        })
    }
}
