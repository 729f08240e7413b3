//! In-memory tabular datasets.
//!
//! A [`Dataset`] is an ordered list of named columns, all of the same
//! length. The length invariant is checked once, when the dataset is
//! built, so every consumer can index rows without further checks.

mod loader;

pub use loader::CsvOptions;

use crate::error::DatasetError;
use crate::value::Value;
use std::collections::HashSet;

/// A named column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Tabular dataset of named, equal-length columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Dataset {
    /// Build a dataset from columns, checking that every column has the
    /// same length and that names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let num_rows = columns.first().map(Column::len).unwrap_or(0);

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
            if column.len() != num_rows {
                return Err(DatasetError::ColumnLengthMismatch {
                    column: column.name.clone(),
                    expected: num_rows,
                    actual: column.len(),
                });
            }
        }

        Ok(Self { columns, num_rows })
    }

    /// Build a dataset from a header and row-major records.
    pub fn from_rows(
        header: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, DatasetError> {
        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DatasetError::ColumnLengthMismatch {
                    column: format!("row {}", index),
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        Self::new(columns)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in dataset order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value at (row, column index).
    pub fn value(&self, row: usize, column: usize) -> Option<&Value> {
        self.columns.get(column)?.values.get(row)
    }

    /// Iterate over the values of one row, in column order.
    pub fn row(&self, row: usize) -> Option<impl Iterator<Item = &Value>> {
        if row >= self.num_rows {
            return None;
        }
        Some(self.columns.iter().map(move |c| &c.values[row]))
    }
}
