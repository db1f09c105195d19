//! Boundary to the external natural-language translator.
//!
//! Whatever produces clause text — in production a hosted language model —
//! plugs in behind the [`Translate`] trait and is handed to the pipeline as
//! an argument, never held as process-wide state. The core promises nothing
//! about the text coming back: it goes straight into the tolerant parser.
//! Retry and timeout policy belong to the caller of the trait, not here.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::error::Result;

/// Strategy for turning a free-text query into raw clause text.
pub trait Translate {
    fn translate(&self, query: &str, catalog: &Catalog) -> Result<String>;
}

/// The instruction block handed to the model behind [`Translate`]: the
/// allowed columns with their kinds, the categorical domains the catalog has
/// observed, the clause grammar, and one worked example, followed by the
/// user's query.
pub fn clause_prompt(query: &str, catalog: &Catalog) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are given a search query over people and the companies they work for. \
         Convert it into structured filters, an optional ordering, and an optional \
         limit on the number of results.\n\n",
    );
    prompt.push_str("These are the columns available for filtering and ordering:\n");
    for (column, kind) in catalog.columns() {
        let _ = writeln!(prompt, "* {} ({})", column, kind);
    }
    for (column, _) in catalog.columns() {
        let values = catalog.known_values(column);
        if values.is_empty() {
            continue;
        }
        let _ = writeln!(
            prompt,
            "\nIf the query mentions a value for {}, pick the closest match among:",
            column
        );
        for value in values {
            let _ = writeln!(prompt, "* {}", value);
        }
    }
    prompt.push_str(
        "\nEach filter goes on its own line, of the form:\n\
         FILTER <column> <operator> <value>\n\
         with operators =, >, <, >= and <=. For example:\n\
         FILTER company_domain = google.com\n\
         FILTER num_followers > 1000\n\n\
         An ordering has the form:\n\
         ORDER <column> <asc or desc>\n\
         There should be at most one ordering.\n\n\
         A limit has the form:\n\
         LIMIT <number of results>\n\n\
         Example query:\n\
         Give me up to 10 people that work in the Education industry and live in \
         San Francisco. I want the people with the most followers.\n\n\
         Example output:\n\
         FILTER industry = Education\n\
         FILTER city_person = San Francisco\n\
         ORDER num_followers desc\n\
         LIMIT 10\n\n\
         Query:\n",
    );
    prompt.push_str(query);
    prompt.push_str("\n\nOutput:");
    prompt
}

/// A canned translator returning a fixed block of clause text, regardless of
/// the query. Used by tests and offline callers, and as the reference for
/// how a real client implements the trait.
pub struct Scripted {
    text: String,
}

impl Scripted {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Translate for Scripted {
    fn translate(&self, _query: &str, _catalog: &Catalog) -> Result<String> {
        Ok(self.text.clone())
    }
}
