use super::position::PositionIndicator;
use super::primitive;
use crate::alias::Date;
use crate::portfolio::Portfolio;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

use log::{debug, warn};

#[derive(Default)]
struct PositionAccumulator {
    pub begin_valuation: f64,
    pub end_valuation: f64,
}

impl PositionAccumulator {
    fn from_position(position: &PositionIndicator) -> Self {
        Self {
            begin_valuation: position.begin_valuation,
            end_valuation: position.end_valuation,
        }
    }
}

impl Add for PositionAccumulator {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            begin_valuation: other.begin_valuation + self.begin_valuation,
            end_valuation: other.end_valuation + self.end_valuation,
        }
    }
}

impl Sum for PositionAccumulator {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Default::default(), PositionAccumulator::add)
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioIndicator {
    pub begin: Date,
    pub end: Date,
    pub positions: Vec<PositionIndicator>,
    pub begin_valuation: f64,
    pub end_valuation: f64,
    pub profit: f64,
    pub return_in_percent: Option<f64>,
}

impl PortfolioIndicator {
    pub fn from_portfolio(portfolio: &Portfolio, begin: Date, end: Date) -> PortfolioIndicator {
        debug!("price portfolio from {} to {}", begin, end);

        let positions = portfolio
            .positions()
            .map(|position| PositionIndicator::from_position(position, begin, end))
            .collect::<Vec<_>>();

        let accumulator = positions
            .iter()
            .map(PositionAccumulator::from_position)
            .sum::<PositionAccumulator>();

        let return_in_percent =
            match primitive::return_in_percent(accumulator.begin_valuation, accumulator.end_valuation)
            {
                Ok(value) => Some(value),
                Err(error) => {
                    warn!("portfolio return from {} to {} : {}", begin, end, error.message);
                    None
                }
            };

        PortfolioIndicator {
            begin,
            end,
            positions,
            begin_valuation: accumulator.begin_valuation,
            end_valuation: accumulator.end_valuation,
            profit: primitive::profit(accumulator.begin_valuation, accumulator.end_valuation),
            return_in_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketdata::Instrument;
    use assert_float_eq::*;
    use std::collections::HashMap;

    fn date_(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_portfolio_() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.add_holding(
            Instrument::shared(
                "StockB",
                HashMap::from([(date_(2024, 1, 1), 200.0), (date_(2024, 1, 31), 190.0)]),
            ),
            5,
        )
        .unwrap();
        portfolio.add_holding(
            Instrument::shared(
                "StockA",
                HashMap::from([(date_(2024, 1, 1), 100.0), (date_(2024, 1, 31), 110.0)]),
            ),
            10,
        )
        .unwrap();
        portfolio
    }

    #[test]
    fn compute_portfolio() {
        let portfolio = make_portfolio_();
        let begin = date_(2024, 1, 1);
        let end = date_(2024, 1, 31);

        let indicator = PortfolioIndicator::from_portfolio(&portfolio, begin, end);

        assert_eq!(indicator.begin, begin);
        assert_eq!(indicator.end, end);
        assert_eq!(indicator.positions.len(), 2);
        assert_eq!(indicator.positions[0].instrument, "StockA");
        assert_eq!(indicator.positions[1].instrument, "StockB");
        assert_float_absolute_eq!(indicator.begin_valuation, 2000.0, 1e-7);
        assert_float_absolute_eq!(indicator.end_valuation, 2050.0, 1e-7);
        assert_float_absolute_eq!(indicator.profit, 50.0, 1e-7);
        assert_float_absolute_eq!(indicator.return_in_percent.unwrap(), 2.5, 1e-7);

        assert_float_absolute_eq!(indicator.begin_valuation, portfolio.value_at(begin), 1e-7);
        assert_float_absolute_eq!(indicator.profit, portfolio.profit(begin, end), 1e-7);
        assert_float_absolute_eq!(
            indicator.return_in_percent.unwrap(),
            portfolio.annualized_return(begin, end).unwrap(),
            1e-7
        );
    }

    #[test]
    fn compute_empty_portfolio() {
        let indicator =
            PortfolioIndicator::from_portfolio(&Portfolio::new(), date_(2024, 1, 1), date_(2024, 1, 31));
        assert!(indicator.positions.is_empty());
        assert_eq!(indicator.begin_valuation, 0.0);
        assert_eq!(indicator.end_valuation, 0.0);
        assert_eq!(indicator.profit, 0.0);
        assert!(indicator.return_in_percent.is_none());
    }
}
