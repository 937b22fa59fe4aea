use crate::error::Error;
use crate::pricer::PortfolioIndicator;

mod csv;
mod json;
mod text;

pub use crate::output::csv::CsvOutput;
pub use crate::output::json::JsonOutput;
pub use crate::output::text::TextOutput;

pub trait Output {
    fn write_indicators(&mut self, indicator: &PortfolioIndicator) -> Result<(), Error>;
}
