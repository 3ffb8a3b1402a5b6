//! Sales Analysis CLI
//!
//! Command-line front end: loads one sales CSV file and prints a report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.csv
//! cargo run -- --report top-products sales.csv
//! cargo run -- --report price-distribution --bins 20 sales.csv > histogram.csv
//! cargo run -- --headers portuguese --report mean-ticket vendas.csv
//! RUST_LOG=debug cargo run -- --report table sales.csv
//! ```
//!
//! Reports are written to stdout, diagnostics to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unparsable file, missing column, etc.)

use sales_analysis::cli;
use sales_analysis::io::DatasetLoader;
use sales_analysis::report::create_report;
use sales_analysis::AnalysisSession;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    let mut session = AnalysisSession::new(DatasetLoader::new(args.to_schema()));
    if let Err(e) = session.request_load(&args.input_file) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let report = create_report(args.report, usize::from(args.bins));
    let mut output = std::io::stdout().lock();
    if let Err(e) = report.render(&session, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
