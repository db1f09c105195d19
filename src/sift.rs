//! The sift clause language: a line-oriented filter/order/limit grammar,
//! its tolerant parser, and the engine that applies parsed clauses to a
//! record set.
//!
//! Clause text normally arrives from an external language-model translator
//! and carries no conformance guarantee, so the parser is best-effort: a
//! line it cannot make sense of is skipped and reported, never fatal. The
//! engine is the opposite: schema and coercion problems abort the whole
//! query, since a partially-filtered result would be misleading.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use roaring::RoaringTreemap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::datatype::Value;
use crate::error::{Result, ScoutError};
use crate::record::Row;

// ------------- Clause model -------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    Equal,
    Greater,
    Less,
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Comparator::Equal),
            ">" => Some(Comparator::Greater),
            "<" => Some(Comparator::Less),
            ">=" => Some(Comparator::GreaterOrEqual),
            "<=" => Some(Comparator::LessOrEqual),
            _ => None,
        }
    }
    fn admits(self, ordering: Ordering) -> bool {
        match self {
            Comparator::Equal => ordering == Ordering::Equal,
            Comparator::Greater => ordering == Ordering::Greater,
            Comparator::Less => ordering == Ordering::Less,
            Comparator::GreaterOrEqual => ordering != Ordering::Less,
            Comparator::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            Comparator::Equal => "=",
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
        };
        write!(f, "{}", token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(Direction::Ascending),
            "desc" => Some(Direction::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "asc"),
            Direction::Descending => write!(f, "desc"),
        }
    }
}

/// One instruction of the clause language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Clause {
    Filter {
        column: String,
        comparator: Comparator,
        value: String,
    },
    Order {
        column: String,
        direction: Direction,
    },
    Limit {
        count: usize,
    },
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Clause::Filter {
                column,
                comparator,
                value,
            } => write!(f, "FILTER {} {} {}", column, comparator, value),
            Clause::Order { column, direction } => write!(f, "ORDER {} {}", column, direction),
            Clause::Limit { count } => write!(f, "LIMIT {}", count),
        }
    }
}

/// Canonical clause text for a sequence, one clause per line. Rendering and
/// re-parsing a sequence yields an equal sequence.
pub fn render_clauses(clauses: &[Clause]) -> String {
    clauses
        .iter()
        .map(Clause::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// ------------- Parser -------------

/// Why a line was dropped rather than parsed into a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// First token is none of FILTER / ORDER / LIMIT.
    UnknownKeyword,
    /// Recognised keyword, but the line does not fit its shape.
    Malformed,
    UnsupportedComparator,
    UnsupportedDirection,
    /// LIMIT argument is not a non-negative integer.
    BadCount,
}

/// A line the parser gave up on. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped {
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {} skipped ({:?}): {}", self.line, self.reason, self.text)
    }
}

/// Best-effort parse result: every clause that could be extracted, plus a
/// diagnostic for every line that could not.
#[derive(Debug, Default)]
pub struct Parsed {
    pub clauses: Vec<Clause>,
    pub skipped: Vec<Skipped>,
}

lazy_static! {
    static ref FILTER_LINE: Regex = Regex::new(r"^FILTER\s+(\S+)\s+(\S+)\s+(.+)$").unwrap();
}

fn parse_line(line: &str, clauses: &mut Vec<Clause>) -> Option<SkipReason> {
    let keyword = line.split_whitespace().next().unwrap_or("");
    match keyword {
        "FILTER" => {
            let Some(captures) = FILTER_LINE.captures(line) else {
                return Some(SkipReason::Malformed);
            };
            let Some(comparator) = Comparator::from_token(&captures[2]) else {
                return Some(SkipReason::UnsupportedComparator);
            };
            // the value is the remainder of the line verbatim, never re-split
            clauses.push(Clause::Filter {
                column: captures[1].to_string(),
                comparator,
                value: captures[3].trim_end().to_string(),
            });
            None
        }
        "ORDER" => {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 3 {
                return Some(SkipReason::Malformed);
            }
            let Some(direction) = Direction::from_token(tokens[2]) else {
                return Some(SkipReason::UnsupportedDirection);
            };
            clauses.push(Clause::Order {
                column: tokens[1].to_string(),
                direction,
            });
            None
        }
        "LIMIT" => {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 2 {
                return Some(SkipReason::Malformed);
            }
            match tokens[1].parse::<usize>() {
                Ok(count) => {
                    clauses.push(Clause::Limit { count });
                    None
                }
                Err(_) => Some(SkipReason::BadCount),
            }
        }
        _ => Some(SkipReason::UnknownKeyword),
    }
}

/// Parse raw multi-line clause text into an ordered clause sequence.
///
/// Empty lines are ignored silently. Any other line that cannot be parsed is
/// recorded and skipped; a single bad line never fails the batch, because the
/// producer of this text is not guaranteed to be well-formed.
pub fn parse_clauses(text: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(reason) = parse_line(line, &mut parsed.clauses) {
            warn!(line = number + 1, reason = ?reason, text = line, "skipping clause line");
            parsed.skipped.push(Skipped {
                line: number + 1,
                text: line.to_string(),
                reason,
            });
        }
    }
    debug!(
        clauses = parsed.clauses.len(),
        skipped = parsed.skipped.len(),
        "clause text parsed"
    );
    parsed
}

// ------------- Engine -------------

/// The records selected by a clause sequence, in their final order.
#[derive(Debug, Clone)]
pub struct Selection {
    pub rows: Vec<Row>,
    pub row_count: usize,
    /// True when some LIMIT clause's bound was reached.
    pub limited: bool,
}

impl Selection {
    /// Project the named columns into display strings, row by row. This is
    /// the tabular shape an outer presentation layer renders or serialises.
    pub fn tabulate(&self, columns: &[&str]) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|&column| {
                        row.get(column)
                            .map(Value::to_string)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Applies clause sequences to record sets, one clause at a time, in order.
///
/// Sequential application is the contract, not an implementation detail:
/// later clauses operate on the output of earlier ones, and the language
/// deliberately allows interleavings such as a LIMIT before an ORDER, which
/// truncates before sorting.
pub struct Engine<'a> {
    catalog: &'a Catalog,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, rows: &[Row], clauses: &[Clause]) -> Result<Selection> {
        let mut working: Vec<Row> = rows.to_vec();
        let mut limited = false;
        for (index, clause) in clauses.iter().enumerate() {
            match clause {
                Clause::Filter {
                    column,
                    comparator,
                    value,
                } => {
                    let kind = self.catalog.kind_of(column).ok_or_else(|| {
                        ScoutError::UnknownColumn {
                            clause: index,
                            column: column.clone(),
                        }
                    })?;
                    let target = kind.coerce(value).ok_or_else(|| ScoutError::TypeCoercion {
                        clause: index,
                        column: column.clone(),
                        kind,
                        value: value.clone(),
                    })?;
                    // one pass over the column collecting matching positions;
                    // the bitmap iterates ascending, keeping original order
                    let mut matches = RoaringTreemap::new();
                    for (position, row) in working.iter().enumerate() {
                        if let Some(held) = row.get(column) {
                            if let Some(ordering) = held.compare(&target) {
                                if comparator.admits(ordering) {
                                    matches.insert(position as u64);
                                }
                            }
                        }
                    }
                    working = matches
                        .iter()
                        .map(|position| Arc::clone(&working[position as usize]))
                        .collect();
                }
                Clause::Order { column, direction } => {
                    self.catalog.kind_of(column).ok_or_else(|| {
                        ScoutError::UnknownColumn {
                            clause: index,
                            column: column.clone(),
                        }
                    })?;
                    // stable, so ties keep their prior relative order
                    working.sort_by(|left, right| {
                        let ordering = match (left.get(column), right.get(column)) {
                            (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
                            (_, _) => Ordering::Equal,
                        };
                        match direction {
                            Direction::Ascending => ordering,
                            Direction::Descending => ordering.reverse(),
                        }
                    });
                }
                Clause::Limit { count } => {
                    // each LIMIT truncates whatever the working set is now,
                    // so successive limits compose as successive truncations
                    if working.len() >= *count {
                        working.truncate(*count);
                        limited = true;
                    }
                }
            }
            debug!(clause = index, rows = working.len(), "clause applied");
        }
        Ok(Selection {
            row_count: working.len(),
            limited,
            rows: working,
        })
    }
}
