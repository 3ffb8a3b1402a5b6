//! Analysis engine
//!
//! This module provides the AnalysisEngine that computes derived views over a
//! loaded [`Dataset`]. Every operation is a pure function of the dataset.
//!
//! The engine enforces the shared preconditions before computing anything:
//! - The dataset has at least one row
//! - Every column the operation reads is present
//!
//! Only then are rows visited, so a result is never computed from a partial
//! set of fields.

use crate::core::grouping::FirstAppearanceGroups;
use crate::core::histogram::bin_values;
use crate::types::{
    AnalysisError, CustomerFrequency, Dataset, Field, NumericField, PriceHistogram, PricePoint,
    ProductVolume, Row,
};
use rust_decimal::Decimal;

/// Read-only analysis over one dataset
#[derive(Debug, Clone, Copy)]
pub struct AnalysisEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        AnalysisEngine { dataset }
    }

    /// Products ranked by total quantity sold, largest first
    ///
    /// Rows without a product or a quantity are left out. Products with equal
    /// totals keep the order in which they first appear in the file.
    ///
    /// # Errors
    ///
    /// - `EmptyDataset` if there are no rows
    /// - `MissingColumn` if the product or quantity column is absent
    /// - `InvalidValue` if a quantity is not a number
    /// - `ArithmeticOverflow` if a total overflows
    pub fn top_products(&self) -> Result<Vec<ProductVolume>, AnalysisError> {
        self.require(&[Field::Product, Field::Quantity])?;

        let mut groups = FirstAppearanceGroups::<Decimal>::new();
        for row in self.dataset.rows() {
            let transaction = &row.transaction;
            let Some(product) = transaction.product.as_deref() else {
                log::debug!("Line {}: no product, skipped in ranking", row.line);
                continue;
            };
            let Some(quantity) = self.numeric(row, Field::Quantity, &transaction.quantity)? else {
                log::debug!("Line {}: no quantity, skipped in ranking", row.line);
                continue;
            };

            let total = groups.entry(product);
            *total = total
                .checked_add(quantity)
                .ok_or_else(|| AnalysisError::arithmetic_overflow("top products"))?;
        }

        Ok(groups
            .into_ranked()
            .into_iter()
            .map(|(product, quantity)| ProductVolume {
                product,
                quantity: quantity.normalize(),
            })
            .collect())
    }

    /// Arithmetic mean of the total value column
    ///
    /// Rows whose total is missing or not a number are excluded from both the
    /// sum and the count.
    ///
    /// # Errors
    ///
    /// - `EmptyDataset` if there are no rows, or none has a numeric total
    /// - `MissingColumn` if the total value column is absent
    /// - `ArithmeticOverflow` if the sum overflows
    pub fn mean_ticket(&self) -> Result<Decimal, AnalysisError> {
        self.require(&[Field::TotalValue])?;

        let mut sum = Decimal::ZERO;
        let mut count: u64 = 0;
        for row in self.dataset.rows() {
            match &row.transaction.total_value {
                NumericField::Number(value) => {
                    sum = sum
                        .checked_add(*value)
                        .ok_or_else(|| AnalysisError::arithmetic_overflow("mean ticket"))?;
                    count += 1;
                }
                NumericField::Malformed(raw) => {
                    log::debug!("Line {}: total '{}' is not a number, skipped", row.line, raw);
                }
                NumericField::Missing => {
                    log::debug!("Line {}: no total, skipped", row.line);
                }
            }
        }

        if count == 0 {
            return Err(AnalysisError::EmptyDataset);
        }
        sum.checked_div(Decimal::from(count))
            .ok_or_else(|| AnalysisError::arithmetic_overflow("mean ticket"))
    }

    /// Number of rows per customer, most frequent first
    ///
    /// Rows without a customer are left out. Ties keep first-appearance order.
    ///
    /// # Errors
    ///
    /// - `EmptyDataset` if there are no rows
    /// - `MissingColumn` if the customer column is absent
    pub fn customer_frequency(&self) -> Result<Vec<CustomerFrequency>, AnalysisError> {
        self.require(&[Field::Customer])?;

        let mut groups = FirstAppearanceGroups::<usize>::new();
        for row in self.dataset.rows() {
            match row.transaction.customer.as_deref() {
                Some(customer) => *groups.entry(customer) += 1,
                None => {
                    log::debug!("Line {}: no customer, skipped in frequency", row.line);
                }
            }
        }

        Ok(groups
            .into_ranked()
            .into_iter()
            .map(|(customer, count)| CustomerFrequency { customer, count })
            .collect())
    }

    /// Histogram of unit prices over [`PriceHistogram::DEFAULT_BINS`] bins
    pub fn price_distribution(&self) -> Result<PriceHistogram, AnalysisError> {
        self.price_distribution_with_bins(PriceHistogram::DEFAULT_BINS)
    }

    /// Histogram of unit prices over `bins` equal-width bins
    ///
    /// Rows without a unit price are left out.
    ///
    /// # Errors
    ///
    /// - `EmptyDataset` if there are no rows, or none has a unit price
    /// - `MissingColumn` if the unit price column is absent
    /// - `InvalidValue` if a unit price is not a number
    /// - `InvalidBinCount` if `bins` is zero
    pub fn price_distribution_with_bins(
        &self,
        bins: usize,
    ) -> Result<PriceHistogram, AnalysisError> {
        self.require(&[Field::UnitPrice])?;
        if bins == 0 {
            return Err(AnalysisError::InvalidBinCount { bins });
        }

        let mut prices = Vec::with_capacity(self.dataset.len());
        for row in self.dataset.rows() {
            if let Some(price) = self.numeric(row, Field::UnitPrice, &row.transaction.unit_price)? {
                prices.push(price);
            }
        }

        bin_values(&prices, bins)
    }

    /// One (unit price, quantity) pair per row, in file order
    ///
    /// # Errors
    ///
    /// - `EmptyDataset` if there are no rows
    /// - `MissingColumn` if the unit price or quantity column is absent
    /// - `InvalidValue` if any row lacks either number
    pub fn price_quantity_pairs(&self) -> Result<Vec<PricePoint>, AnalysisError> {
        self.require(&[Field::UnitPrice, Field::Quantity])?;

        self.dataset
            .rows()
            .iter()
            .map(|row| {
                let transaction = &row.transaction;
                Ok(PricePoint {
                    unit_price: self.required_numeric(row, Field::UnitPrice, &transaction.unit_price)?,
                    quantity: self.required_numeric(row, Field::Quantity, &transaction.quantity)?,
                })
            })
            .collect()
    }

    /// Shared preconditions: rows present, then every column present
    fn require(&self, fields: &[Field]) -> Result<(), AnalysisError> {
        if self.dataset.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        for &field in fields {
            if !self.dataset.has_field(field) {
                return Err(AnalysisError::missing_column(
                    self.dataset.schema().column(field),
                ));
            }
        }
        Ok(())
    }

    /// Numeric cell that may be blank; malformed text is an error
    fn numeric(
        &self,
        row: &Row,
        field: Field,
        value: &NumericField,
    ) -> Result<Option<Decimal>, AnalysisError> {
        match value {
            NumericField::Number(number) => Ok(Some(*number)),
            NumericField::Missing => Ok(None),
            NumericField::Malformed(raw) => Err(AnalysisError::invalid_value(
                self.dataset.schema().column(field),
                row.line,
                raw,
            )),
        }
    }

    /// Numeric cell that must hold a number
    fn required_numeric(
        &self,
        row: &Row,
        field: Field,
        value: &NumericField,
    ) -> Result<Decimal, AnalysisError> {
        self.numeric(row, field, value)?.ok_or_else(|| {
            AnalysisError::invalid_value(self.dataset.schema().column(field), row.line, "")
        })
    }
}
