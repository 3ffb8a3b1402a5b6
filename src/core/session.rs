//! Analysis session
//!
//! Holds the caller's single dataset handle and routes analysis requests to
//! the [`AnalysisEngine`].
//!
//! # States
//!
//! - `Absent`: nothing loaded yet, or every load so far failed
//! - `Loaded`: one immutable dataset from the last successful load
//!
//! A successful load replaces the dataset wholesale. A failed load leaves the
//! session exactly as it was, so the last good dataset stays available.

use crate::core::engine::AnalysisEngine;
use crate::io::DatasetLoader;
use crate::types::{
    AnalysisError, CustomerFrequency, Dataset, LoadError, PriceHistogram, PricePoint,
    ProductVolume,
};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;

/// Whether a dataset is currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Absent,
    Loaded,
}

/// Caller-owned handle to the current dataset
#[derive(Debug, Default)]
pub struct AnalysisSession {
    loader: DatasetLoader,
    dataset: Option<Arc<Dataset>>,
}

impl AnalysisSession {
    /// Create a session in the `Absent` state
    pub fn new(loader: DatasetLoader) -> Self {
        AnalysisSession {
            loader,
            dataset: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.dataset {
            Some(_) => SessionState::Loaded,
            None => SessionState::Absent,
        }
    }

    /// Current dataset, for row-by-row display
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_deref()
    }

    /// Shared handle to the current dataset, for use off the caller's thread
    pub fn snapshot(&self) -> Option<Arc<Dataset>> {
        self.dataset.clone()
    }

    /// Load `path` and make it the current dataset
    ///
    /// The file is parsed completely before the previous dataset is replaced.
    ///
    /// # Errors
    ///
    /// Returns the `LoadError` from the loader. The session keeps whatever
    /// dataset it held before the call.
    pub fn request_load(&mut self, path: &Path) -> Result<&Dataset, LoadError> {
        match self.loader.load(path) {
            Ok(dataset) => {
                let current = self.dataset.insert(Arc::new(dataset));
                Ok(&**current)
            }
            Err(e) => {
                if self.dataset.is_some() {
                    log::warn!("Load failed, keeping the previous dataset: {}", e);
                }
                Err(e)
            }
        }
    }

    pub fn request_top_products(&self) -> Result<Vec<ProductVolume>, AnalysisError> {
        self.engine()?.top_products()
    }

    pub fn request_mean_ticket(&self) -> Result<Decimal, AnalysisError> {
        self.engine()?.mean_ticket()
    }

    pub fn request_customer_frequency(&self) -> Result<Vec<CustomerFrequency>, AnalysisError> {
        self.engine()?.customer_frequency()
    }

    pub fn request_price_distribution(&self) -> Result<PriceHistogram, AnalysisError> {
        self.engine()?.price_distribution()
    }

    pub fn request_price_distribution_with_bins(
        &self,
        bins: usize,
    ) -> Result<PriceHistogram, AnalysisError> {
        self.engine()?.price_distribution_with_bins(bins)
    }

    pub fn request_price_quantity_pairs(&self) -> Result<Vec<PricePoint>, AnalysisError> {
        self.engine()?.price_quantity_pairs()
    }

    /// Engine over the current dataset; `EmptyDataset` while `Absent`
    fn engine(&self) -> Result<AnalysisEngine<'_>, AnalysisError> {
        self.dataset
            .as_deref()
            .map(AnalysisEngine::new)
            .ok_or(AnalysisError::EmptyDataset)
    }
}
