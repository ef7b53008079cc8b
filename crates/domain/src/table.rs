//! Column-oriented view of a tabular response.

use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::response::ApiResponse;
use crate::value::{Scalar, ValueKind};

/// A named column with values in response row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of values.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no values.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if at least one value is neither null nor blank.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.values.iter().any(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
    }

    /// Returns string values, with `None` for nulls and non-strings.
    #[must_use]
    pub fn texts(&self) -> Vec<Option<&str>> {
        self.values.iter().map(Value::as_str).collect()
    }

    /// Coerces every non-blank value to `kind`, preserving row order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCell` on the first value that cannot be coerced.
    pub fn scalars(&self, kind: ValueKind) -> DomainResult<Vec<Scalar>> {
        let mut out = Vec::with_capacity(self.values.len());
        for value in &self.values {
            if let Some(scalar) = Scalar::from_json(value, kind, &self.name)? {
                out.push(scalar);
            }
        }
        Ok(out)
    }
}

/// An ordered set of named columns sharing one row order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Builds a table from field names and row arrays.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if a row is not an array and
    /// `DomainError::MisalignedRow` if its length differs from `fields`.
    pub fn new(fields: Vec<String>, rows: &[Value]) -> DomainResult<Self> {
        let mut columns: Vec<Column> = fields
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (index, row) in rows.iter().enumerate() {
            let cells = row.as_array().ok_or_else(|| DomainError::InvalidField {
                field: "data".to_string(),
                reason: format!("row {index} is not an array"),
            })?;
            if cells.len() != columns.len() {
                return Err(DomainError::MisalignedRow {
                    row: index,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(cells) {
                column.values.push(cell.clone());
            }
        }

        Ok(Self {
            columns,
            row_count: rows.len(),
        })
    }

    /// Projects a decoded response. Missing `fields` or `data` give an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not line up with the fields.
    pub fn from_response(response: &ApiResponse) -> DomainResult<Self> {
        let fields = response.fields().unwrap_or_default();
        let rows = response.data().unwrap_or_default();
        if fields.is_empty() && !rows.is_empty() {
            return Err(DomainError::MissingField("fields".to_string()));
        }
        Self::new(fields, rows)
    }

    /// Returns the column with the given name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns true if a column with the given name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
