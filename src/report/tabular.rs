//! CSV reports
//!
//! One report per analysis, plus the row table. Each runs its analysis
//! first and only writes once a result is available.

use crate::core::AnalysisSession;
use crate::io::csv_format::{
    write_customer_frequency_csv, write_mean_ticket_csv, write_price_histogram_csv,
    write_price_points_csv, write_rows_csv, write_top_products_csv,
};
use crate::report::Report;
use crate::types::{AnalysisError, SalesError};
use std::io::Write;

/// Loaded rows, all columns, in file order
#[derive(Debug, Clone, Copy)]
pub struct TableReport;

impl Report for TableReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let dataset = session.dataset().ok_or(AnalysisError::EmptyDataset)?;
        write_rows_csv(dataset, output)?;
        Ok(())
    }
}

/// Products ranked by volume sold
#[derive(Debug, Clone, Copy)]
pub struct TopProductsReport;

impl Report for TopProductsReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let ranking = session.request_top_products()?;
        write_top_products_csv(&ranking, output)?;
        Ok(())
    }
}

/// Mean transaction value
#[derive(Debug, Clone, Copy)]
pub struct MeanTicketReport;

impl Report for MeanTicketReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let mean = session.request_mean_ticket()?;
        write_mean_ticket_csv(mean, output)?;
        Ok(())
    }
}

/// Purchases per customer
#[derive(Debug, Clone, Copy)]
pub struct CustomerFrequencyReport;

impl Report for CustomerFrequencyReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let frequency = session.request_customer_frequency()?;
        write_customer_frequency_csv(&frequency, output)?;
        Ok(())
    }
}

/// Unit price histogram
#[derive(Debug, Clone, Copy)]
pub struct PriceDistributionReport {
    pub bins: usize,
}

impl Report for PriceDistributionReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let histogram = session.request_price_distribution_with_bins(self.bins)?;
        write_price_histogram_csv(&histogram, output)?;
        Ok(())
    }
}

/// Unit price and quantity of every row
#[derive(Debug, Clone, Copy)]
pub struct PriceQuantityReport;

impl Report for PriceQuantityReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let points = session.request_price_quantity_pairs()?;
        write_price_points_csv(&points, output)?;
        Ok(())
    }
}
