use super::primitive;
use crate::alias::Date;
use crate::portfolio::Position;
use serde::Serialize;

use log::debug;

#[derive(Debug, Serialize)]
pub struct PositionIndicator {
    pub instrument: String,
    pub quantity: i64,
    pub begin_price: f64,
    pub end_price: f64,
    pub begin_valuation: f64,
    pub end_valuation: f64,
    pub profit: f64,
    pub return_in_percent: Option<f64>,
}

impl PositionIndicator {
    pub fn from_position(position: &Position, begin: Date, end: Date) -> PositionIndicator {
        let instrument = position.instrument.borrow();
        for date in [begin, end] {
            if !instrument.has_price(date) {
                debug!("no price for {} at {}, valued at 0", instrument.name(), date);
            }
        }

        let begin_price = instrument.price(begin);
        let end_price = instrument.price(end);
        let begin_valuation = begin_price * position.quantity as f64;
        let end_valuation = end_price * position.quantity as f64;

        PositionIndicator {
            instrument: instrument.name().to_string(),
            quantity: position.quantity,
            begin_price,
            end_price,
            begin_valuation,
            end_valuation,
            profit: primitive::profit(begin_valuation, end_valuation),
            return_in_percent: primitive::return_in_percent(begin_valuation, end_valuation).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketdata::Instrument;
    use assert_float_eq::*;
    use std::collections::HashMap;

    #[test]
    fn compute_position() {
        let begin = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let end = Date::from_ymd_opt(2024, 1, 31).unwrap();
        let position = Position {
            instrument: Instrument::shared("StockB", HashMap::from([(begin, 200.0), (end, 190.0)])),
            quantity: 5,
        };

        let indicator = PositionIndicator::from_position(&position, begin, end);
        assert_eq!(indicator.instrument, "StockB");
        assert_eq!(indicator.quantity, 5);
        assert_float_absolute_eq!(indicator.begin_price, 200.0, 1e-7);
        assert_float_absolute_eq!(indicator.end_price, 190.0, 1e-7);
        assert_float_absolute_eq!(indicator.begin_valuation, 1000.0, 1e-7);
        assert_float_absolute_eq!(indicator.end_valuation, 950.0, 1e-7);
        assert_float_absolute_eq!(indicator.profit, -50.0, 1e-7);
        assert_float_absolute_eq!(indicator.return_in_percent.unwrap(), -5.0, 1e-7);
    }

    #[test]
    fn compute_position_without_begin_price() {
        let begin = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let end = Date::from_ymd_opt(2024, 1, 31).unwrap();
        let position = Position {
            instrument: Instrument::shared("StockC", HashMap::from([(end, 50.0)])),
            quantity: 8,
        };

        let indicator = PositionIndicator::from_position(&position, begin, end);
        assert_float_absolute_eq!(indicator.begin_valuation, 0.0, 1e-7);
        assert_float_absolute_eq!(indicator.end_valuation, 400.0, 1e-7);
        assert_float_absolute_eq!(indicator.profit, 400.0, 1e-7);
        assert!(indicator.return_in_percent.is_none());
    }
}
