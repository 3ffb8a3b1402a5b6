//! Dataset loader
//!
//! Reads a comma-separated file with a header row into an immutable
//! [`Dataset`]. Delegates cell interpretation to the csv_format module.
//!
//! # Design
//!
//! The whole file is read before anything is returned: the loader yields
//! either a complete dataset or a [`LoadError`], never a truncated row set.
//! Loading is permissive. Column presence and numeric validity are not
//! checked here; each analysis checks the columns it needs.
//!
//! ```no_run
//! use sales_analysis::io::DatasetLoader;
//! use std::path::Path;
//!
//! let loader = DatasetLoader::default();
//! match loader.load(Path::new("sales.csv")) {
//!     Ok(dataset) => println!("Loaded {} rows", dataset.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Handling
//!
//! - Open/read failures map to `FileNotFound` or `Io`
//! - Bad quoting or invalid UTF-8 map to `Parse`, with the line number
//! - Header problems (no header, empty or duplicated names) are reported
//!   before any row is read
//! - A row with more fields than the header is rejected; shorter rows are
//!   padded with empty cells

use crate::io::csv_format::{convert_row, FieldPositions};
use crate::types::{ColumnSchema, Dataset, LoadError, Row};
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads sales files using a fixed column schema
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    schema: ColumnSchema,
}

impl DatasetLoader {
    /// Create a loader that interprets semantic fields with `schema`
    pub fn new(schema: ColumnSchema) -> Self {
        DatasetLoader { schema }
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Load a dataset from a file path
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the file cannot be opened or read, or is not
    /// valid comma-separated text with a usable header row.
    pub fn load(&self, path: &Path) -> Result<Dataset, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::io(path, &e))?;
        self.load_from_reader(file, path)
    }

    /// Load a dataset from any reader; `source` is used for error messages
    pub fn load_from_reader<R: Read>(&self, input: R, source: &Path) -> Result<Dataset, LoadError> {
        // Cells are kept verbatim so headers are never altered
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::None)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        let columns = read_columns(&mut reader, source)?;
        let positions = FieldPositions::resolve(&self.schema, &columns);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| LoadError::csv(source, &e))?;
            let line = record.position().map_or(0, |pos| pos.line());

            if record.len() > columns.len() {
                return Err(LoadError::row_too_long(
                    source,
                    line,
                    columns.len(),
                    record.len(),
                ));
            }

            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            if cells.len() < columns.len() {
                log::debug!(
                    "Line {}: {} of {} fields present, padding with empty cells",
                    line,
                    cells.len(),
                    columns.len()
                );
                cells.resize(columns.len(), String::new());
            }

            let transaction = convert_row(&positions, &cells);
            rows.push(Row {
                line,
                cells,
                transaction,
            });
        }

        log::info!(
            "Loaded {} rows with {} columns from '{}'",
            rows.len(),
            columns.len(),
            source.display()
        );

        Ok(Dataset::new(
            source.to_path_buf(),
            self.schema.clone(),
            columns,
            rows,
        ))
    }
}

/// Read and validate the header row
fn read_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    source: &Path,
) -> Result<Vec<String>, LoadError> {
    let headers = reader
        .headers()
        .map_err(|e| LoadError::csv(source, &e))?
        .clone();

    if headers.is_empty() {
        return Err(LoadError::missing_header(source));
    }

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(headers.len());
    for (index, name) in headers.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(LoadError::empty_column_name(source, index + 1));
        }
        if !seen.insert(name) {
            return Err(LoadError::duplicate_column(source, name));
        }
        columns.push(name.to_string());
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericField;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn load_str(content: &str) -> Result<Dataset, LoadError> {
        DatasetLoader::default().load_from_reader(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_load_reads_all_rows_in_file_order() {
        let file = create_temp_csv(
            b"product,quantity,total_value\nCaneta,3,6.0\nLapis,5,5.0\nCaneta,2,4.0\n",
        );

        let dataset = DatasetLoader::default().load(file.path()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.columns(), ["product", "quantity", "total_value"]);
        let products: Vec<_> = dataset
            .transactions()
            .map(|t| t.product.as_deref().unwrap())
            .collect();
        assert_eq!(products, ["Caneta", "Lapis", "Caneta"]);
        let lines: Vec<_> = dataset.rows().iter().map(|r| r.line).collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(dataset.source(), file.path());
    }

    #[test]
    fn test_load_fails_on_missing_file() {
        let result = DatasetLoader::default().load(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_keeps_extra_columns_verbatim() {
        let dataset = load_str("data,product, quantity\n2024-01-02,Caneta, 3\n").unwrap();

        assert_eq!(dataset.columns(), ["data", "product", " quantity"]);
        assert_eq!(dataset.rows()[0].cells, ["2024-01-02", "Caneta", " 3"]);
        // " quantity" is not "quantity"
        assert_eq!(dataset.rows()[0].transaction.quantity, NumericField::Missing);
    }

    #[test]
    fn test_load_keeps_malformed_numbers() {
        let dataset = load_str("product,total_value\nA,10\nB,bad\n").unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.rows()[1].transaction.total_value,
            NumericField::Malformed("bad".to_string())
        );
    }

    #[test]
    fn test_load_pads_short_rows() {
        let dataset = load_str("product,quantity,customer\nA,1\n").unwrap();

        assert_eq!(dataset.rows()[0].cells, ["A", "1", ""]);
        assert_eq!(dataset.rows()[0].transaction.customer, None);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dataset = load_str("product,quantity\nA,1\n\nB,2\n").unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.rows()[1].transaction.quantity,
            NumericField::Number(Decimal::new(2, 0))
        );
    }

    #[test]
    fn test_load_header_only_gives_empty_dataset() {
        let dataset = load_str("product,quantity\n").unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.columns().len(), 2);
    }

    #[test]
    fn test_load_with_portuguese_schema() {
        let loader = DatasetLoader::new(ColumnSchema::portuguese());
        let dataset = loader
            .load_from_reader(
                "Produto,Quantidade,Valor Total,Preço Unitário,Cliente\nCaderno,2,30.00,15.00,Ana\n"
                    .as_bytes(),
                Path::new("vendas.csv"),
            )
            .unwrap();

        let transaction = &dataset.rows()[0].transaction;
        assert_eq!(transaction.product.as_deref(), Some("Caderno"));
        assert_eq!(transaction.unit_price.value(), Some(Decimal::new(15, 0)));
        assert_eq!(transaction.customer.as_deref(), Some("Ana"));
    }

    #[rstest]
    #[case::empty_file("")]
    #[case::blank_lines_only("\n\n")]
    fn test_load_rejects_missing_header(#[case] content: &str) {
        assert!(matches!(
            load_str(content),
            Err(LoadError::MissingHeader { .. })
        ));
    }

    #[test]
    fn test_load_rejects_empty_column_name() {
        let result = load_str("product,,quantity\nA,x,1\n");
        assert!(matches!(
            result,
            Err(LoadError::EmptyColumnName { position: 2, .. })
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_columns() {
        let result = load_str("product,quantity,product\nA,1,B\n");
        assert_eq!(
            result,
            Err(LoadError::DuplicateColumn {
                path: "test.csv".to_string(),
                column: "product".to_string(),
            })
        );
    }

    #[test]
    fn test_load_rejects_row_longer_than_header() {
        let result = load_str("product,quantity\nA,1\nB,2,extra\n");
        assert_eq!(
            result,
            Err(LoadError::RowTooLong {
                path: "test.csv".to_string(),
                line: 3,
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let file = create_temp_csv(b"product,quantity\n\xff\xfe,1\n");

        let result = DatasetLoader::default().load(file.path());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_load_handles_quoted_fields() {
        let dataset = load_str("product,quantity\n\"Caderno, 96 folhas\",4\n").unwrap();

        assert_eq!(
            dataset.rows()[0].transaction.product.as_deref(),
            Some("Caderno, 96 folhas")
        );
    }
}
