use crate::alias::Date;
use crate::marketdata::SharedInstrument;

#[derive(Debug)]
pub struct Position {
    pub instrument: SharedInstrument,
    pub quantity: i64,
}

impl Position {
    pub fn valuation(&self, at: Date) -> f64 {
        self.instrument.borrow().price(at) * self.quantity as f64
    }
}
