use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CellValue – a single cell in a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
///
/// Untagged serde representation so records round-trip as plain JSON values
/// (`null`, `true`, `7`, `19.3`, `"mortgage"`). Variant order matters for
/// deserialization: integers are tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "<null>"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric consumers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the dataset
// ---------------------------------------------------------------------------

/// One record: column name → value. A key absent from the map is an implicit
/// null cell for that row.
pub type Row = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Dataset – rows × named columns
// ---------------------------------------------------------------------------

/// An in-memory tabular dataset with an ordered column schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Ordered list of column names (the schema).
    pub column_names: Vec<String>,
    /// All records, in source order.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset with an explicit column order.
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { column_names, rows }
    }

    /// Build a dataset from rows alone, inferring the schema from the union
    /// of row keys (sorted).
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut names: BTreeSet<String> = BTreeSet::new();
        for row in &rows {
            for col in row.keys() {
                names.insert(col.clone());
            }
        }
        Dataset {
            column_names: names.into_iter().collect(),
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `name` is part of the schema.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }
}
