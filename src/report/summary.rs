//! Combined text summary
//!
//! Best-selling products, mean ticket and purchase frequency in one
//! human-readable block. All three analyses run before anything is written.

use crate::core::AnalysisSession;
use crate::io::csv_format::format_decimal;
use crate::report::Report;
use crate::types::SalesError;
use rust_decimal::RoundingStrategy;
use std::io::Write;

/// Top products, mean ticket and customer frequency as plain text
#[derive(Debug, Clone, Copy)]
pub struct SummaryReport;

impl Report for SummaryReport {
    fn render(&self, session: &AnalysisSession, output: &mut dyn Write) -> Result<(), SalesError> {
        let ranking = session.request_top_products()?;
        let mean = session.request_mean_ticket()?;
        let frequency = session.request_customer_frequency()?;

        writeln!(output, "Top products:")?;
        for entry in &ranking {
            writeln!(output, "  {}: {}", entry.product, format_decimal(entry.quantity))?;
        }
        writeln!(output)?;
        let mean = mean.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        writeln!(output, "Mean ticket: {:.2}", mean)?;
        writeln!(output)?;
        writeln!(output, "Purchase frequency:")?;
        for entry in &frequency {
            writeln!(output, "  {}: {}", entry.customer, entry.count)?;
        }
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalysisError;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn loaded_session(content: &str) -> (AnalysisSession, NamedTempFile) {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let mut session = AnalysisSession::default();
        session.request_load(file.path()).unwrap();
        (session, file)
    }

    #[test]
    fn test_summary_lists_all_three_views() {
        let (session, _file) = loaded_session(
            "product,quantity,total_value,customer\n\
             Caneta,3,7.5,Ana\n\
             Caderno,1,12,Bia\n\
             Caneta,2,5,Ana\n",
        );
        let mut output = Vec::new();

        SummaryReport.render(&session, &mut output).unwrap();

        let expected = "Top products:\n  Caneta: 5\n  Caderno: 1\n\n\
                        Mean ticket: 8.17\n\n\
                        Purchase frequency:\n  Ana: 2\n  Bia: 1\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[rstest]
    #[case::rounds_up("A,1,10,Ana\nA,1,12.455,Ana\n", "11.23")]
    #[case::midpoint_away_from_zero("A,1,0.125,Ana\n", "0.13")]
    #[case::rounds_down("A,1,8.1649,Ana\n", "8.16")]
    #[case::pads_whole_values("A,1,8,Ana\n", "8.00")]
    fn test_summary_rounds_mean_ticket(#[case] rows: &str, #[case] expected: &str) {
        let (session, _file) =
            loaded_session(&format!("product,quantity,total_value,customer\n{}", rows));
        let mut output = Vec::new();

        SummaryReport.render(&session, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(
            output.contains(&format!("Mean ticket: {}\n", expected)),
            "unexpected summary:\n{}",
            output
        );
    }

    #[test]
    fn test_summary_fails_without_customer_column() {
        let (session, _file) = loaded_session("product,quantity,total_value\nA,1,2\n");
        let mut output = Vec::new();

        let result = SummaryReport.render(&session, &mut output);

        assert_eq!(
            result,
            Err(SalesError::Analysis(AnalysisError::missing_column("customer")))
        );
        assert!(output.is_empty());
    }
}
