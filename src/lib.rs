//! Sales Analysis Library
//! # Overview
//!
//! This library loads a tabular sales record (one row per transaction) from a
//! CSV file and computes derived summaries over it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Dataset, Transaction, results, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - CSV loading and result serialization
//! - [`core`] - Analysis components:
//!   - [`core::engine`] - The derived views over a dataset
//!   - [`core::session`] - The caller's current dataset (absent or loaded)
//! - [`report`] - Pluggable renderers, one per view
//!
//! # Analyses
//!
//! - **Top products**: units sold per product, largest first
//! - **Mean ticket**: average total value per transaction
//! - **Customer frequency**: purchases per customer, most frequent first
//! - **Price distribution**: equal-width histogram of unit prices
//! - **Price/quantity pairs**: raw points for a scatter plot
//!
//! Ties in the rankings keep the order in which each group first appears in
//! the file.
//!
//! # Example
//!
//! ```no_run
//! use sales_analysis::AnalysisSession;
//! use std::path::Path;
//!
//! let mut session = AnalysisSession::default();
//! session.request_load(Path::new("sales.csv")).unwrap();
//! for entry in session.request_top_products().unwrap() {
//!     println!("{}: {}", entry.product, entry.quantity);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod types;

pub use core::{AnalysisEngine, AnalysisSession, SessionState};
pub use io::DatasetLoader;
pub use types::{
    AnalysisError, ColumnSchema, CustomerFrequency, Dataset, Field, LoadError, NumericField,
    PriceHistogram, PricePoint, ProductVolume, Row, SalesError, Transaction,
};
