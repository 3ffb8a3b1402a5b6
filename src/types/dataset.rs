//! Dataset types
//!
//! A [`Dataset`] is the immutable, fully populated result of one successful
//! load. Every source column is retained verbatim for display; the five
//! semantic fields are additionally interpreted into a [`Transaction`] per row.

use super::schema::{ColumnSchema, Field};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// Numeric cell as found in the source file
///
/// Loading is permissive: a cell that does not parse is kept as `Malformed`
/// and each analysis decides whether to skip it or fail.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericField {
    /// Column absent, or the cell is empty
    Missing,
    /// Parsed numeric value
    Number(Decimal),
    /// Non-empty cell that is not a number (raw text kept)
    Malformed(String),
}

impl NumericField {
    /// The parsed value, if any
    pub fn value(&self) -> Option<Decimal> {
        match self {
            NumericField::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Semantic view of one row
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Item identifier (`None` when the cell is empty or the column absent)
    pub product: Option<String>,
    /// Units sold
    pub quantity: NumericField,
    /// Monetary total for the row
    pub total_value: NumericField,
    /// Price of a single unit
    pub unit_price: NumericField,
    /// Buyer identifier
    pub customer: Option<String>,
}

/// One data row of the source file
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Line number in the source file (the header is line 1)
    pub line: u64,
    /// Raw cells, one per column, padded with empty strings for short rows
    pub cells: Vec<String>,
    /// Interpretation of the semantic fields
    pub transaction: Transaction,
}

/// Fully loaded sales dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source: PathBuf,
    schema: ColumnSchema,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub(crate) fn new(
        source: PathBuf,
        schema: ColumnSchema,
        columns: Vec<String>,
        rows: Vec<Row>,
    ) -> Self {
        Dataset {
            source,
            schema,
            columns,
            rows,
        }
    }

    /// Path the dataset was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Schema used to interpret the semantic fields
    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Header names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the file has the header mapped to `field`
    pub fn has_field(&self, field: Field) -> bool {
        self.column_index(self.schema.column(field)).is_some()
    }

    /// Position of a header, compared exactly
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Semantic view of each row, in file order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.rows.iter().map(|row| &row.transaction)
    }
}
