//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `schema`: Column schema mapping semantic fields to headers
//! - `dataset`: Loaded dataset, rows and transactions
//! - `analysis`: Analysis result values
//! - `error`: Error types for loading and analysis

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod schema;

pub use analysis::{CustomerFrequency, PriceHistogram, PricePoint, ProductVolume};
pub use dataset::{Dataset, NumericField, Row, Transaction};
pub use error::{AnalysisError, LoadError, SalesError};
pub use schema::{ColumnSchema, Field};
