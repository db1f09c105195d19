use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::datatype::{Value, ValueKind};
use crate::record::{ColumnHasher, Row};

/// The schema catalog: a fixed mapping from column name to value kind, plus
/// the set of values observed for categorical columns.
///
/// The observed domains exist only to give the external translator context
/// (so it can snap a query's wording onto a known job title, seniority or
/// industry); the execution engine never consults them. The catalog is not
/// mutated within a query's lifetime: `observe` runs once when the dataset
/// is loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // declaration order, kept so translator context lists columns predictably
    order: Vec<String>,
    kinds: HashMap<String, ValueKind, ColumnHasher>,
    domains: HashMap<String, BTreeSet<String>, ColumnHasher>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The joined people/company table produced by the external loader:
    /// a Person entity joined to its Company on a foreign key, with colliding
    /// field names suffixed by originating entity.
    pub fn people_companies() -> Self {
        let mut catalog = Self::new();
        catalog.declare("company_domain", ValueKind::String);
        catalog.declare("job_title", ValueKind::Categorical);
        catalog.declare("seniority", ValueKind::Categorical);
        catalog.declare("city_person", ValueKind::String);
        catalog.declare("state_person", ValueKind::String);
        catalog.declare("country_person", ValueKind::String);
        catalog.declare("num_followers", ValueKind::Integer);
        catalog.declare("name_company", ValueKind::String);
        catalog.declare("city_company", ValueKind::String);
        catalog.declare("state_company", ValueKind::String);
        catalog.declare("country_company", ValueKind::String);
        catalog.declare("industry", ValueKind::Categorical);
        catalog.declare("employee_count", ValueKind::Integer);
        catalog.declare("revenue", ValueKind::Integer);
        catalog.declare("start_date", ValueKind::Date);
        catalog
    }

    pub fn declare(&mut self, column: &str, kind: ValueKind) {
        if self.kinds.insert(column.to_string(), kind).is_none() {
            self.order.push(column.to_string());
        }
        if kind == ValueKind::Categorical {
            self.domains.entry(column.to_string()).or_default();
        }
    }

    pub fn kind_of(&self, column: &str) -> Option<ValueKind> {
        self.kinds.get(column).copied()
    }

    /// Columns in declaration order, with their kinds.
    pub fn columns(&self) -> impl Iterator<Item = (&str, ValueKind)> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.kinds[name.as_str()]))
    }

    /// The values observed for a categorical column; empty for every
    /// other column.
    pub fn known_values(&self, column: &str) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.domains.get(column).unwrap_or(&EMPTY)
    }

    /// Collect the categorical domains present in a loaded dataset.
    pub fn observe(&mut self, rows: &[Row]) {
        for row in rows {
            for (column, values) in self.domains.iter_mut() {
                if let Some(Value::String(value)) = row.get(column) {
                    if !values.contains(value) {
                        values.insert(value.clone());
                    }
                }
            }
        }
        debug!(
            columns = self.domains.len(),
            "categorical domains observed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn production_schema_kinds() {
        let catalog = Catalog::people_companies();
        assert_eq!(catalog.kind_of("num_followers"), Some(ValueKind::Integer));
        assert_eq!(catalog.kind_of("start_date"), Some(ValueKind::Date));
        assert_eq!(catalog.kind_of("industry"), Some(ValueKind::Categorical));
        assert_eq!(catalog.kind_of("no_such_column"), None);
        assert_eq!(catalog.columns().count(), 15);
    }

    #[test]
    fn observe_collects_categorical_domains_only() {
        let mut catalog = Catalog::people_companies();
        let rows = vec![
            Record::new()
                .with("industry", "Education")
                .with("city_person", "Austin")
                .into_row(),
            Record::new().with("industry", "Finance").into_row(),
            Record::new().with("industry", "Education").into_row(),
        ];
        catalog.observe(&rows);
        let industries: Vec<&str> = catalog
            .known_values("industry")
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(industries, ["Education", "Finance"]);
        assert!(
            catalog.known_values("city_person").is_empty(),
            "string columns have no tracked domain"
        );
    }
}
