mod position;

pub use position::*;

use crate::alias::Date;
use crate::error::{Error, ErrorKind};
use crate::marketdata::SharedInstrument;
use crate::pricer::primitive;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, warn};

#[derive(Debug, Default)]
pub struct Portfolio {
    positions: BTreeMap<String, Position>,
}

impl Portfolio {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds `quantity` units of `instrument`.
    ///
    /// Positions are keyed by instrument name. When the name is already held the
    /// quantity accumulates on the existing position and the instrument stored
    /// first stays in place, so the prices carried by `instrument` are ignored.
    /// Fails with [`ErrorKind::QuantityOverflow`] when the accumulated quantity
    /// does not fit in an `i64`; the position is left unchanged.
    pub fn add_holding(&mut self, instrument: SharedInstrument, quantity: i64) -> Result<(), Error> {
        let name = instrument.borrow().name().to_string();
        match self.positions.get_mut(&name) {
            Some(position) => {
                if !Rc::ptr_eq(&position.instrument, &instrument) {
                    warn!(
                        "{} is already held, keeping its first instrument and ignoring the new prices",
                        name
                    );
                }
                let total = position.quantity.checked_add(quantity).ok_or_else(|| {
                    Error::new(
                        ErrorKind::QuantityOverflow,
                        format!(
                            "adding {} to {} units of {} overflows",
                            quantity, position.quantity, name
                        ),
                    )
                })?;
                position.quantity = total;
                debug!("position {} increased to {}", name, position.quantity);
            }
            None => {
                debug!("new position {} with quantity {}", name, quantity);
                self.positions.insert(
                    name,
                    Position {
                        instrument,
                        quantity,
                    },
                );
            }
        }
        Ok(())
    }

    pub fn value_at(&self, at: Date) -> f64 {
        self.positions
            .values()
            .map(|position| position.valuation(at))
            .sum()
    }

    pub fn profit(&self, start: Date, end: Date) -> f64 {
        primitive::profit(self.value_at(start), self.value_at(end))
    }

    /// Percentage return between `start` and `end`.
    ///
    /// Despite the name there is no day-count or compounding adjustment. Fails
    /// with [`ErrorKind::ZeroBaseline`](crate::error::ErrorKind::ZeroBaseline)
    /// when the portfolio is worth nothing at `start`.
    pub fn annualized_return(&self, start: Date, end: Date) -> Result<f64, Error> {
        primitive::return_in_percent(self.value_at(start), self.value_at(end))
    }

    pub fn get_position(&self, name: &str) -> Option<&Position> {
        self.positions.get(name)
    }

    pub fn quantity(&self, name: &str) -> Option<i64> {
        self.positions.get(name).map(|position| position.quantity)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn get_instrument_name_list(&self) -> Vec<String> {
        self.positions.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
