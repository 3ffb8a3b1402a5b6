//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (cell interpretation, result serialization)
//! - `loader` - Reads a whole file into a `Dataset`

pub mod csv_format;
pub mod loader;

pub use loader::DatasetLoader;
