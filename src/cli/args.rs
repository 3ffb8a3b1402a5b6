use clap::{Parser, ValueEnum};
use crate::types::{ColumnSchema, Field};
use std::path::PathBuf;

/// Analyse a sales CSV file
#[derive(Parser, Debug)]
#[command(name = "sales-analysis")]
#[command(about = "Summarise sales records from a CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing sales records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Report to print
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "summary",
        help = "Report to print to stdout"
    )]
    pub report: ReportKind,

    /// Header preset used to find the semantic columns
    #[arg(
        long = "headers",
        value_name = "PRESET",
        default_value = "english",
        help = "Header names: 'english' (product, quantity, ...) or 'portuguese' (Produto, Quantidade, ...)"
    )]
    pub headers: HeaderPreset,

    #[arg(long = "product-column", value_name = "HEADER", help = "Header of the product column")]
    pub product_column: Option<String>,

    #[arg(long = "quantity-column", value_name = "HEADER", help = "Header of the quantity column")]
    pub quantity_column: Option<String>,

    #[arg(long = "total-column", value_name = "HEADER", help = "Header of the total value column")]
    pub total_column: Option<String>,

    #[arg(long = "price-column", value_name = "HEADER", help = "Header of the unit price column")]
    pub price_column: Option<String>,

    #[arg(long = "customer-column", value_name = "HEADER", help = "Header of the customer column")]
    pub customer_column: Option<String>,

    /// Number of bins for the price distribution
    #[arg(
        long = "bins",
        value_name = "COUNT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=1000),
        help = "Number of equal-width bins for the price distribution (1-1000)"
    )]
    pub bins: u16,
}

/// Available reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Top products, mean ticket and customer frequency
    Summary,
    /// The loaded rows, all columns
    Table,
    TopProducts,
    MeanTicket,
    CustomerFrequency,
    PriceDistribution,
    PriceQuantity,
}

/// Header name presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeaderPreset {
    English,
    Portuguese,
}

impl CliArgs {
    /// Build the column schema from the preset and any per-column overrides
    pub fn to_schema(&self) -> ColumnSchema {
        let base = match self.headers {
            HeaderPreset::English => ColumnSchema::default(),
            HeaderPreset::Portuguese => ColumnSchema::portuguese(),
        };

        [
            (Field::Product, &self.product_column),
            (Field::Quantity, &self.quantity_column),
            (Field::TotalValue, &self.total_column),
            (Field::UnitPrice, &self.price_column),
            (Field::Customer, &self.customer_column),
        ]
        .into_iter()
        .fold(base, |schema, (field, header)| match header {
            Some(header) => schema.with_column(field, header.clone()),
            None => schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_report(&["program", "sales.csv"], ReportKind::Summary)]
    #[case::table(&["program", "--report", "table", "sales.csv"], ReportKind::Table)]
    #[case::top_products(&["program", "--report", "top-products", "sales.csv"], ReportKind::TopProducts)]
    #[case::mean_ticket(&["program", "--report", "mean-ticket", "sales.csv"], ReportKind::MeanTicket)]
    #[case::frequency(&["program", "--report", "customer-frequency", "sales.csv"], ReportKind::CustomerFrequency)]
    #[case::distribution(&["program", "--report", "price-distribution", "sales.csv"], ReportKind::PriceDistribution)]
    #[case::pairs(&["program", "--report", "price-quantity", "sales.csv"], ReportKind::PriceQuantity)]
    fn test_report_parsing(#[case] args: &[&str], #[case] expected: ReportKind) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.report, expected);
    }

    #[rstest]
    #[case::default_bins(&["program", "sales.csv"], 10)]
    #[case::custom_bins(&["program", "--bins", "25", "sales.csv"], 25)]
    #[case::upper_bound(&["program", "--bins", "1000", "sales.csv"], 1000)]
    fn test_bins_parsing(#[case] args: &[&str], #[case] expected: u16) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.bins, expected);
    }

    #[test]
    fn test_default_schema_is_english() {
        let parsed = CliArgs::try_parse_from(["program", "sales.csv"]).unwrap();
        assert_eq!(parsed.to_schema(), ColumnSchema::default());
    }

    #[test]
    fn test_portuguese_preset_with_override() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--headers",
            "portuguese",
            "--customer-column",
            "Nome do Cliente",
            "vendas.csv",
        ])
        .unwrap();

        let schema = parsed.to_schema();
        assert_eq!(schema.column(Field::Product), "Produto");
        assert_eq!(schema.column(Field::Customer), "Nome do Cliente");
    }

    #[test]
    fn test_column_overrides_on_english_preset() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--price-column",
            "price",
            "--total-column",
            "amount",
            "sales.csv",
        ])
        .unwrap();

        let schema = parsed.to_schema();
        assert_eq!(schema.column(Field::UnitPrice), "price");
        assert_eq!(schema.column(Field::TotalValue), "amount");
        assert_eq!(schema.column(Field::Quantity), "quantity");
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_report(&["program", "--report", "invalid", "sales.csv"])]
    #[case::invalid_headers(&["program", "--headers", "french", "sales.csv"])]
    #[case::zero_bins(&["program", "--bins", "0", "sales.csv"])]
    #[case::too_many_bins(&["program", "--bins", "1001", "sales.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
