//! Scout – search people and companies with free-form text.
//!
//! A user writes a query like "the five healthcare CEOs with the most
//! followers"; an external language model turns that into a few lines of a
//! small clause language; scout parses those lines and executes them against
//! an in-memory table of people joined to their companies. The clause
//! language — called *sift* — has exactly three instructions:
//!
//! ```text
//! FILTER <column> <=|>|<|>=|<=> <value>
//! ORDER <column> <asc|desc>
//! LIMIT <non-negative integer>
//! ```
//!
//! Clauses apply strictly in sequence to a working set that starts as the
//! whole table: filters keep the matching subsequence in stable order,
//! an ordering re-sorts the entire current set, and a limit truncates it.
//!
//! ## Modules
//! * [`datatype`] – typed column values (string, integer, float, calendar
//!   date) with coercion from raw clause text and natural ordering.
//! * [`record`] – an immutable row of the joined table, shared as
//!   [`record::Row`].
//! * [`catalog`] – the schema catalog: column kinds plus the observed
//!   domains of categorical columns (translator context only).
//! * [`sift`] – the clause language: model, tolerant parser with per-line
//!   diagnostics, canonical rendering, and the execution engine.
//! * [`translate`] – the boundary to the external translator: a strategy
//!   trait, the instruction block it is prompted with, and a canned
//!   implementation for tests.
//! * [`interface`] – the synchronous pipeline from free text to selected
//!   rows.
//! * [`error`] – the crate-wide error enum.
//!
//! Translator output is treated as untrusted: lines the parser cannot make
//! sense of are skipped and reported, and the query runs on whatever valid
//! clauses remain. Schema and coercion problems found during execution, by
//! contrast, abort the query with a structured error.
//!
//! ## Quick Start
//! ```
//! use scout::catalog::Catalog;
//! use scout::interface::SearchInterface;
//! use scout::record::Record;
//!
//! let rows = vec![
//!     Record::new()
//!         .with("industry", "Education")
//!         .with("num_followers", 1200)
//!         .into_row(),
//!     Record::new()
//!         .with("industry", "Finance")
//!         .with("num_followers", 800)
//!         .into_row(),
//! ];
//! let interface = SearchInterface::new(Catalog::people_companies(), rows);
//! let outcome = interface
//!     .run_clauses("FILTER industry = Education\nORDER num_followers desc")
//!     .unwrap();
//! assert_eq!(outcome.selection.row_count, 1);
//! ```
//!
//! Dataset generation, CSV loading and the join itself, the language-model
//! call, and any server or CLI surface live outside this crate; scout only
//! sees the loaded rows, a [`translate::Translate`] implementation, and the
//! clause text.

pub mod catalog;
pub mod datatype;
pub mod error;
pub mod interface;
pub mod record;
pub mod sift;
pub mod translate;
