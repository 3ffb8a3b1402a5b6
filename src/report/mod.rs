//! Report module
//!
//! A report renders one view of the session's dataset to a writer. Reports
//! are selected at runtime, so the command line (or any other presentation
//! layer) stays free of analysis logic.

use crate::cli::ReportKind;
use crate::core::AnalysisSession;
use crate::types::SalesError;
use std::io::Write;

pub mod summary;
pub mod tabular;

pub use summary::SummaryReport;
pub use tabular::{
    CustomerFrequencyReport, MeanTicketReport, PriceDistributionReport, PriceQuantityReport,
    TableReport, TopProductsReport,
};

/// Renders one view of the current dataset
pub trait Report: Send + Sync {
    /// Write the report for the session's current dataset
    ///
    /// # Errors
    ///
    /// Returns `SalesError::Analysis` when the underlying analysis fails
    /// (nothing loaded, a column missing, ...) and `SalesError::Output` when
    /// writing fails. Nothing is written when the analysis fails.
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError>;
}

/// Create the report for `kind`
///
/// `bins` only applies to the price distribution.
pub fn create_report(kind: ReportKind, bins: usize) -> Box<dyn Report> {
    match kind {
        ReportKind::Summary => Box::new(SummaryReport),
        ReportKind::Table => Box::new(TableReport),
        ReportKind::TopProducts => Box::new(TopProductsReport),
        ReportKind::MeanTicket => Box::new(MeanTicketReport),
        ReportKind::CustomerFrequency => Box::new(CustomerFrequencyReport),
        ReportKind::PriceDistribution => Box::new(PriceDistributionReport { bins }),
        ReportKind::PriceQuantity => Box::new(PriceQuantityReport),
    }
}
