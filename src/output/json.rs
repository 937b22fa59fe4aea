use crate::error::Error;
use crate::output::Output;
use crate::pricer::PortfolioIndicator;

use std::io::Write;

pub struct JsonOutput<W: Write> {
    writer: W,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for JsonOutput<W> {
    fn write_indicators(&mut self, indicator: &PortfolioIndicator) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut self.writer, indicator)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
