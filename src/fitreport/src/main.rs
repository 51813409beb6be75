#[macro_use]
extern crate log;

use std::io;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fitreport::{OutputFormat, Reporter, SAMPLE_PACKAGES};

#[derive(Parser)]
pub struct FitReportCli {
    #[arg(env = "FITREPORT_FORMAT", long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: Option<FitReportCommand>,
}

#[derive(Subcommand)]
pub enum FitReportCommand {
    ///
    /// Print reports for the built-in sample packages
    ///
    Demo,
    ///
    /// Print the report for a single sensor package
    ///
    Report {
        /// Activity code: RUN, WLK or SWM
        workout_type: String,
        /// Raw values in package order, see `codes`
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    ///
    /// List supported activity codes and their package layout
    ///
    Codes,
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(error) = dotenv_result {
        debug!("{}", error);
    }

    let cli = FitReportCli::parse();
    let stdout = io::stdout().lock();
    let mut reporter = Reporter::new(stdout, cli.format);

    match cli.subcommand.unwrap_or(FitReportCommand::Demo) {
        FitReportCommand::Demo => reporter.report_all(SAMPLE_PACKAGES),
        FitReportCommand::Report {
            workout_type,
            values,
        } => reporter.report_package(&workout_type, &values),
        FitReportCommand::Codes => reporter.write_codes(),
    }
}
