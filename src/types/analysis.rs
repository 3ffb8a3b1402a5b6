//! Analysis result types
//!
//! Plain derived values handed to the presentation layer. None of them
//! borrow from the dataset that produced them.

use rust_decimal::Decimal;
use serde::Serialize;

/// Total units sold for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductVolume {
    pub product: String,
    pub quantity: Decimal,
}

/// Number of purchases made by one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerFrequency {
    pub customer: String,
    pub count: usize,
}

/// Equal-width histogram of unit prices
///
/// `edges` has one more element than `counts`; bin `i` spans
/// `[edges[i], edges[i + 1])`, except the last bin which also includes its
/// right edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistogram {
    pub edges: Vec<Decimal>,
    pub counts: Vec<usize>,
}

impl PriceHistogram {
    /// Number of bins used when none is requested
    pub const DEFAULT_BINS: usize = 10;

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Number of values counted across all bins
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// One (unit price, quantity) observation, for scatter plots
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub unit_price: Decimal,
    pub quantity: Decimal,
}
