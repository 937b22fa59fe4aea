use crate::error::Error;
use crate::output::Output;
use crate::pricer::PortfolioIndicator;

use std::io::Write;

pub struct CsvOutput<W: Write> {
    writer: W,
}

fn format_return(value: Option<f64>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

impl<W: Write> CsvOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for CsvOutput<W> {
    fn write_indicators(&mut self, indicator: &PortfolioIndicator) -> Result<(), Error> {
        self.writer.write_all(
            "Instrument;Quantity;Begin Price;End Price;Begin Valuation;End Valuation;Profit;Return(%)\n"
                .as_bytes(),
        )?;
        for position in indicator.positions.iter() {
            self.writer.write_all(
                format!(
                    "{};{};{};{};{};{};{};{}\n",
                    position.instrument,
                    position.quantity,
                    position.begin_price,
                    position.end_price,
                    position.begin_valuation,
                    position.end_valuation,
                    position.profit,
                    format_return(position.return_in_percent),
                )
                .as_bytes(),
            )?;
        }
        self.writer.write_all(
            format!(
                "Total;;;;{};{};{};{}\n",
                indicator.begin_valuation,
                indicator.end_valuation,
                indicator.profit,
                format_return(indicator.return_in_percent),
            )
            .as_bytes(),
        )?;
        Ok(())
    }
}
