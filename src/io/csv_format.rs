//! CSV format handling for sales rows and analysis output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Interpretation of raw cells as numbers or text
//! - Conversion from raw rows to [`Transaction`]s
//! - CSV serialization of the loaded rows and of every analysis result
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{
    ColumnSchema, CustomerFrequency, Dataset, Field, NumericField, PriceHistogram, PricePoint,
    ProductVolume, Transaction,
};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Position of each semantic field in the header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldPositions {
    product: Option<usize>,
    quantity: Option<usize>,
    total_value: Option<usize>,
    unit_price: Option<usize>,
    customer: Option<usize>,
}

impl FieldPositions {
    /// Locate the schema's headers among the file's columns (exact match)
    pub fn resolve(schema: &ColumnSchema, columns: &[String]) -> Self {
        let find = |field: Field| {
            let name = schema.column(field);
            columns.iter().position(|column| column == name)
        };
        FieldPositions {
            product: find(Field::Product),
            quantity: find(Field::Quantity),
            total_value: find(Field::TotalValue),
            unit_price: find(Field::UnitPrice),
            customer: find(Field::Customer),
        }
    }
}

/// Interpret a raw cell as a number
///
/// Surrounding whitespace is ignored. Plain decimal and scientific notation
/// are accepted; an empty cell is `Missing`, anything else is `Malformed`.
/// Digit separators (`1_000`) are not plain decimal and count as malformed.
pub fn parse_numeric_cell(raw: &str) -> NumericField {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NumericField::Missing;
    }
    if trimmed.contains('_') {
        return NumericField::Malformed(raw.to_string());
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(NumericField::Number)
        .unwrap_or_else(|_| NumericField::Malformed(raw.to_string()))
}

/// Interpret a raw cell as text; blank cells carry no value
pub fn parse_text_cell(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Build the semantic view of a row from its raw cells
pub fn convert_row(positions: &FieldPositions, cells: &[String]) -> Transaction {
    let cell = |position: Option<usize>| position.and_then(|i| cells.get(i)).map(String::as_str);
    let numeric = |position: Option<usize>| {
        cell(position).map_or(NumericField::Missing, parse_numeric_cell)
    };

    Transaction {
        product: cell(positions.product).and_then(parse_text_cell),
        quantity: numeric(positions.quantity),
        total_value: numeric(positions.total_value),
        unit_price: numeric(positions.unit_price),
        customer: cell(positions.customer).and_then(parse_text_cell),
    }
}

/// Render a decimal without trailing zeros
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Write the loaded rows, all columns, in file order
pub fn write_rows_csv(dataset: &Dataset, output: &mut dyn Write) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(&row.cells)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize result rows under an explicit header
///
/// The header is written even when there are no rows.
fn write_serialized<T: Serialize>(
    header: &[&str],
    entries: &[T],
    output: &mut dyn Write,
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(header)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the product ranking with columns: product, quantity
pub fn write_top_products_csv(
    ranking: &[ProductVolume],
    output: &mut dyn Write,
) -> Result<(), csv::Error> {
    write_serialized(&["product", "quantity"], ranking, output)
}

/// Write the mean ticket as a single-value table
pub fn write_mean_ticket_csv(mean: Decimal, output: &mut dyn Write) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["mean_ticket"])?;
    writer.write_record([format_decimal(mean)])?;
    writer.flush()?;
    Ok(())
}

/// Write the customer frequency table with columns: customer, count
pub fn write_customer_frequency_csv(
    frequency: &[CustomerFrequency],
    output: &mut dyn Write,
) -> Result<(), csv::Error> {
    write_serialized(&["customer", "count"], frequency, output)
}

/// Write histogram bins with columns: bin_start, bin_end, count
pub fn write_price_histogram_csv(
    histogram: &PriceHistogram,
    output: &mut dyn Write,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["bin_start", "bin_end", "count"])?;
    for (bounds, count) in histogram.edges.windows(2).zip(&histogram.counts) {
        writer.write_record([
            format_decimal(bounds[0]),
            format_decimal(bounds[1]),
            count.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write scatter points with columns: unit_price, quantity
pub fn write_price_points_csv(
    points: &[PricePoint],
    output: &mut dyn Write,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["unit_price", "quantity"])?;
    for point in points {
        writer.write_record([
            format_decimal(point.unit_price),
            format_decimal(point.quantity),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
