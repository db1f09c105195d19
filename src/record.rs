use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

use seahash::SeaHasher;
use serde::{Deserialize, Serialize};

use crate::datatype::Value;

pub type ColumnHasher = BuildHasherDefault<SeaHasher>;

/// Rows are shared, never copied, between working sets.
pub type Row = Arc<Record>;

/// One row of the joined people/company table.
///
/// A record is immutable once constructed: query execution only ever builds
/// new filtered, reordered or truncated collections of rows. Colliding field
/// names from the join carry `_person` / `_company` suffixes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, Value, ColumnHasher>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }
    /// Builder-style field assignment, used when loading the joined table.
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(column.to_string(), value.into());
        self
    }
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    pub fn into_row(self) -> Row {
        Arc::new(self)
    }
}
