//! Core analysis module
//!
//! This module contains the analysis components:
//! - `engine` - The five derived views over a dataset
//! - `grouping` - Grouping that remembers first-appearance order
//! - `histogram` - Equal-width binning
//! - `session` - The caller's dataset handle (absent or loaded)

pub mod engine;
pub mod grouping;
pub mod histogram;
pub mod session;

pub use engine::AnalysisEngine;
pub use session::{AnalysisSession, SessionState};
