use crate::error::{Error, ErrorKind};

pub fn profit(begin_valuation: f64, end_valuation: f64) -> f64 {
    end_valuation - begin_valuation
}

pub fn return_in_percent(begin_valuation: f64, end_valuation: f64) -> Result<f64, Error> {
    if begin_valuation == 0.0 {
        return Err(Error::new(
            ErrorKind::ZeroBaseline,
            "no return computable from a zero baseline value",
        ));
    }
    Ok(profit(begin_valuation, end_valuation) / begin_valuation * 100.0)
}
