// used for the date-kinded column values
use chrono::NaiveDate;

// used to compare coerced values against column values
use std::cmp::Ordering;
// used to print out readable forms of kinds and values
use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds a column in the joined table may declare.
///
/// `Categorical` columns hold strings drawn from a known, enumerable domain
/// (job titles, seniorities, industries). They compare exactly like `String`
/// columns; the domain is only collected as context for the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Categorical,
    Integer,
    Float,
    Date,
}

impl ValueKind {
    /// Coerce a raw clause value into this kind, or `None` if the text
    /// does not denote a value of the kind.
    pub fn coerce(self, raw: &str) -> Option<Value> {
        match self {
            ValueKind::String | ValueKind::Categorical => Some(Value::String(raw.to_string())),
            ValueKind::Integer => raw.parse::<i64>().ok().map(Value::Int),
            ValueKind::Float => raw.parse::<f64>().ok().map(Value::Float),
            ValueKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(Value::Date),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Categorical => "categorical",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Date => "date",
        };
        write!(f, "{}", name)
    }
}

/// A typed scalar held by a record column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Date(_) => ValueKind::Date,
        }
    }
    /// Natural order within a kind. `None` when the kinds differ, in which
    /// case the values are incomparable and a predicate over them holds false.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Some(a.total_cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (_, _) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}
impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}
impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}
