//! Equal-width binning of decimal values
//!
//! Bins span `[min, max]` of the observed values. When the bin width would be
//! zero (every value the same, or a range below decimal precision) the range
//! is widened by 0.5 on both sides, so all values land in the bin holding them.

use crate::types::{AnalysisError, PriceHistogram};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const OPERATION: &str = "price distribution";

/// Count `values` into `bins` equal-width bins
///
/// The last bin is closed on the right so the maximum is counted.
///
/// # Errors
///
/// - `InvalidBinCount` if `bins` is zero
/// - `EmptyDataset` if there are no values
/// - `ArithmeticOverflow` if the range cannot be represented
pub fn bin_values(values: &[Decimal], bins: usize) -> Result<PriceHistogram, AnalysisError> {
    if bins == 0 {
        return Err(AnalysisError::InvalidBinCount { bins });
    }
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Err(AnalysisError::EmptyDataset);
    };

    let (mut low, mut high) = (min, max);
    let mut width = bin_width(low, high, bins)?;
    if width.is_zero() {
        let half = Decimal::new(5, 1);
        low = min
            .checked_sub(half)
            .ok_or_else(|| AnalysisError::arithmetic_overflow(OPERATION))?;
        high = max
            .checked_add(half)
            .ok_or_else(|| AnalysisError::arithmetic_overflow(OPERATION))?;
        width = bin_width(low, high, bins)?;
    }

    let mut edges = Vec::with_capacity(bins + 1);
    for i in 0..bins {
        let offset = width
            .checked_mul(Decimal::from(i as u64))
            .and_then(|offset| low.checked_add(offset))
            .ok_or_else(|| AnalysisError::arithmetic_overflow(OPERATION))?;
        edges.push(offset);
    }
    edges.push(high);

    let mut counts = vec![0; bins];
    for &value in values {
        counts[bin_index(&edges, width, value)] += 1;
    }

    Ok(PriceHistogram { edges, counts })
}

fn bin_width(low: Decimal, high: Decimal, bins: usize) -> Result<Decimal, AnalysisError> {
    high.checked_sub(low)
        .and_then(|range| range.checked_div(Decimal::from(bins as u64)))
        .ok_or_else(|| AnalysisError::arithmetic_overflow(OPERATION))
}

/// Bin holding `value`; `edges` must come from `bin_values`
fn bin_index(edges: &[Decimal], width: Decimal, value: Decimal) -> usize {
    let last = edges.len() - 2;
    let estimate = (value - edges[0])
        .checked_div(width)
        .and_then(|ratio| ratio.floor().to_usize())
        .unwrap_or(last)
        .min(last);

    // Rounded widths can put the estimate one bin off at an edge
    if estimate < last && value >= edges[estimate + 1] {
        estimate + 1
    } else if estimate > 0 && value < edges[estimate] {
        estimate - 1
    } else {
        estimate
    }
}
