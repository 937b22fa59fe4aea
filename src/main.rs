use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use log::info;
use std::collections::HashMap;

use portfolio_valuation::alias::Date;
use portfolio_valuation::error::Error;
use portfolio_valuation::marketdata::Instrument;
use portfolio_valuation::output::{CsvOutput, JsonOutput, Output, TextOutput};
use portfolio_valuation::portfolio::Portfolio;
use portfolio_valuation::pricer::PortfolioIndicator;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputType {
    Text,
    Csv,
    Json,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Value the sample portfolio between two dates
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// begin date (YYYY-MM-DD)
    #[clap(default_value = "2024-01-01", short, long, value_parser)]
    begin: String,

    /// end date (YYYY-MM-DD)
    #[clap(default_value = "2024-01-31", short, long, value_parser)]
    end: String,

    /// output type
    #[clap(default_value_t = OutputType::Text, short = 't', long, value_parser)]
    output_type: OutputType,
}

fn parse_date(value: &str) -> Result<Date, Error> {
    Ok(Date::parse_from_str(value, "%Y-%m-%d")?)
}

fn make_sample_portfolio() -> Result<Portfolio, Error> {
    let begin = parse_date("2024-01-01")?;
    let end = parse_date("2024-01-31")?;

    let stock_a = Instrument::shared("StockA", HashMap::from([(begin, 100.0), (end, 110.0)]));
    let stock_b = Instrument::shared("StockB", HashMap::from([(begin, 200.0), (end, 190.0)]));

    let mut portfolio = Portfolio::new();
    portfolio.add_holding(stock_a, 10)?;
    portfolio.add_holding(stock_b, 5)?;
    Ok(portfolio)
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    let begin = parse_date(&args.begin)?;
    let end = parse_date(&args.end)?;

    //
    // build portfolio
    let portfolio = make_sample_portfolio()?;
    info!("sample portfolio with {} positions", portfolio.len());

    //
    // price
    let indicator = PortfolioIndicator::from_portfolio(&portfolio, begin, end);
    info!("price portfolio done");

    //
    // write output
    let stdout = std::io::stdout().lock();
    let mut output: Box<dyn Output> = match args.output_type {
        OutputType::Text => Box::new(TextOutput::new(stdout)),
        OutputType::Csv => Box::new(CsvOutput::new(stdout)),
        OutputType::Json => Box::new(JsonOutput::new(stdout)),
    };
    output.write_indicators(&indicator)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;
    use portfolio_valuation::error::ErrorKind;

    #[test]
    fn sample_portfolio() {
        let portfolio = make_sample_portfolio().unwrap();
        let begin = parse_date("2024-01-01").unwrap();
        let end = parse_date("2024-01-31").unwrap();

        assert_eq!(portfolio.len(), 2);
        assert_float_absolute_eq!(portfolio.profit(begin, end), 50.0, 1e-7);
        assert_float_absolute_eq!(portfolio.annualized_return(begin, end).unwrap(), 2.5, 1e-7);
    }

    #[test]
    fn invalid_date() {
        let error = parse_date("2024-13-01").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Argument);
    }
}
