//! Error types for sales analysis
//!
//! Errors are values the presentation layer can match on. Each one is scoped
//! to the call that produced it; there is no global error state.
//!
//! # Error Categories
//!
//! - **Load Errors**: the file cannot be opened or parsed as delimited text.
//!   Fatal to that load attempt only; a previously loaded dataset stays valid.
//! - **Analysis Errors**: no rows to analyse, a required column is absent, or a
//!   required cell holds something that is not a number.
//! - **Output Errors**: rendering a report to its writer failed.

use std::path::Path;
use thiserror::Error;

/// Failure to load a dataset from a file
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while opening or reading the file
    #[error("I/O error reading '{path}': {message}")]
    Io {
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// The file is not valid delimited text (bad quoting, invalid UTF-8, ...)
    #[error("CSV parse error in '{path}'{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        path: String,
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The file has no header row
    #[error("'{path}' has no header row")]
    MissingHeader { path: String },

    /// A header cell is empty, so its column cannot be named
    #[error("Empty column name at position {position} in '{path}'")]
    EmptyColumnName {
        path: String,
        /// 1-based position of the column
        position: usize,
    },

    /// The same header appears twice, so lookups would be ambiguous
    #[error("Duplicate column '{column}' in '{path}'")]
    DuplicateColumn { path: String, column: String },

    /// A data row has more fields than the header
    #[error("Line {line} of '{path}' has {found} fields, header has {expected}")]
    RowTooLong {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Failure of an analysis over the current dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// No rows are available (nothing loaded, or no usable values)
    #[error("No data available for analysis")]
    EmptyDataset,

    /// A column required by the analysis is absent from the dataset
    #[error("Required column '{column}' is missing")]
    MissingColumn {
        /// Header name as expected in the file
        column: String,
    },

    /// A cell the analysis needs is missing or not a number
    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValue {
        column: String,
        line: u64,
        value: String,
    },

    /// Arithmetic overflow while aggregating
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// The histogram cannot have zero bins
    #[error("Invalid bin count {bins}: at least one bin is required")]
    InvalidBinCount { bins: usize },
}

/// Top-level error for reports and the command line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Writing a report failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl From<std::io::Error> for SalesError {
    fn from(error: std::io::Error) -> Self {
        SalesError::Output {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SalesError {
    fn from(error: csv::Error) -> Self {
        SalesError::Output {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LoadError {
    /// Create a LoadError from an I/O failure, distinguishing a missing file
    pub fn io(path: &Path, error: &std::io::Error) -> Self {
        let path = path.display().to_string();
        if error.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound { path }
        } else {
            LoadError::Io {
                path,
                message: error.to_string(),
            }
        }
    }

    /// Create a LoadError from a CSV reader failure
    pub fn csv(path: &Path, error: &csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return LoadError::io(path, io_error);
        }
        LoadError::Parse {
            path: path.display().to_string(),
            line: error.position().map(|pos| pos.line()),
            message: error.to_string(),
        }
    }

    /// Create a MissingHeader error
    pub fn missing_header(path: &Path) -> Self {
        LoadError::MissingHeader {
            path: path.display().to_string(),
        }
    }

    /// Create an EmptyColumnName error
    pub fn empty_column_name(path: &Path, position: usize) -> Self {
        LoadError::EmptyColumnName {
            path: path.display().to_string(),
            position,
        }
    }

    /// Create a DuplicateColumn error
    pub fn duplicate_column(path: &Path, column: &str) -> Self {
        LoadError::DuplicateColumn {
            path: path.display().to_string(),
            column: column.to_string(),
        }
    }

    /// Create a RowTooLong error
    pub fn row_too_long(path: &Path, line: u64, expected: usize, found: usize) -> Self {
        LoadError::RowTooLong {
            path: path.display().to_string(),
            line,
            expected,
            found,
        }
    }
}

impl AnalysisError {
    /// Create a MissingColumn error
    pub fn missing_column(column: &str) -> Self {
        AnalysisError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(column: &str, line: u64, value: &str) -> Self {
        AnalysisError::InvalidValue {
            column: column.to_string(),
            line,
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AnalysisError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LoadError::FileNotFound { path: "sales.csv".to_string() },
        "File not found: sales.csv"
    )]
    #[case::parse_with_line(
        LoadError::Parse { path: "sales.csv".to_string(), line: Some(4), message: "unequal lengths".to_string() },
        "CSV parse error in 'sales.csv' at line 4: unequal lengths"
    )]
    #[case::parse_without_line(
        LoadError::Parse { path: "sales.csv".to_string(), line: None, message: "invalid UTF-8".to_string() },
        "CSV parse error in 'sales.csv': invalid UTF-8"
    )]
    #[case::missing_header(
        LoadError::MissingHeader { path: "empty.csv".to_string() },
        "'empty.csv' has no header row"
    )]
    #[case::duplicate_column(
        LoadError::DuplicateColumn { path: "sales.csv".to_string(), column: "product".to_string() },
        "Duplicate column 'product' in 'sales.csv'"
    )]
    #[case::row_too_long(
        LoadError::RowTooLong { path: "sales.csv".to_string(), line: 3, expected: 2, found: 3 },
        "Line 3 of 'sales.csv' has 3 fields, header has 2"
    )]
    fn test_load_error_display(#[case] error: LoadError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::empty_dataset(AnalysisError::EmptyDataset, "No data available for analysis")]
    #[case::missing_column(
        AnalysisError::missing_column("Preço Unitário"),
        "Required column 'Preço Unitário' is missing"
    )]
    #[case::invalid_value(
        AnalysisError::invalid_value("quantity", 7, "lots"),
        "Invalid value 'lots' in column 'quantity' at line 7"
    )]
    #[case::overflow(
        AnalysisError::arithmetic_overflow("mean ticket"),
        "Arithmetic overflow in mean ticket"
    )]
    #[case::bins(
        AnalysisError::InvalidBinCount { bins: 0 },
        "Invalid bin count 0: at least one bin is required"
    )]
    fn test_analysis_error_display(#[case] error: AnalysisError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = LoadError::io(Path::new("missing.csv"), &io_error);
        assert_eq!(
            error,
            LoadError::FileNotFound {
                path: "missing.csv".to_string()
            }
        );
    }

    #[test]
    fn test_io_error_keeps_message() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error = LoadError::io(Path::new("locked.csv"), &io_error);
        assert_eq!(
            error.to_string(),
            "I/O error reading 'locked.csv': Permission denied"
        );
    }

    #[test]
    fn test_sales_error_is_transparent() {
        let error: SalesError = AnalysisError::EmptyDataset.into();
        assert!(matches!(error, SalesError::Analysis(AnalysisError::EmptyDataset)));
        assert_eq!(error.to_string(), "No data available for analysis");
    }
}
