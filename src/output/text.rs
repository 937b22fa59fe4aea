use crate::error::Error;
use crate::output::Output;
use crate::pricer::PortfolioIndicator;

use std::io::Write;

pub struct TextOutput<W: Write> {
    writer: W,
}

impl<W: Write> TextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for TextOutput<W> {
    fn write_indicators(&mut self, indicator: &PortfolioIndicator) -> Result<(), Error> {
        let period = format!(
            "{} - {}",
            indicator.begin.format("%Y-%m-%d"),
            indicator.end.format("%Y-%m-%d")
        );
        writeln!(
            self.writer,
            "Portfolio profit between {}: ${:.2}",
            period, indicator.profit
        )?;
        match indicator.return_in_percent {
            Some(value) => writeln!(self.writer, "Annualized between {}: {:.2}%", period, value)?,
            None => writeln!(
                self.writer,
                "Annualized between {}: n/a (zero baseline value)",
                period
            )?,
        }
        Ok(())
    }
}
